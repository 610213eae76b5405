//! Sim command: strategy-family matchups over many single-hand games.
//!
//! Each game seats two members of each family at a fresh table (full
//! stacks, new shoe), plays one hand, and credits the family of every seat
//! tied for the biggest stack afterwards — fractional credit on ties.

use std::io::Write;

use holdem_engine::game::Game;
use holdem_engine::player::Seat;
use holdem_engine::strategy::Strategy;

use holdem_ai::create_strategy;

use crate::cli::Matchup;
use crate::error::CliError;
use crate::ui;

const STARTING_CHIPS: u32 = 1000;

pub fn handle_sim_command(
    matchup: Matchup,
    hands: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    let (family_a, family_b) = matchup.families();
    let mut wins_a = 0.0f64;
    let mut wins_b = 0.0f64;

    for i in 0..hands as u64 {
        let hand_seed = base_seed.wrapping_add(i);
        let seats = vec![
            Seat::new(format!("{}-1", family_a), STARTING_CHIPS),
            Seat::new(format!("{}-2", family_a), STARTING_CHIPS),
            Seat::new(format!("{}-1", family_b), STARTING_CHIPS),
            Seat::new(format!("{}-2", family_b), STARTING_CHIPS),
        ];
        let strategies: Vec<Box<dyn Strategy>> = vec![
            create_strategy(family_a, hand_seed),
            create_strategy(family_a, hand_seed.wrapping_add(1)),
            create_strategy(family_b, hand_seed.wrapping_add(2)),
            create_strategy(family_b, hand_seed.wrapping_add(3)),
        ];

        let mut game = Game::with_seed(seats, strategies, 1, hand_seed)?;
        game.play_hand()?;

        let max_chips = game
            .seats()
            .iter()
            .map(Seat::chips)
            .max()
            .unwrap_or_default();
        let leaders: Vec<usize> = game
            .seats()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.chips() == max_chips)
            .map(|(idx, _)| idx)
            .collect();

        let credit = 1.0 / leaders.len() as f64;
        for idx in leaders {
            if idx < 2 {
                wins_a += credit;
            } else {
                wins_b += credit;
            }
        }
    }

    writeln!(out, "Out of {} hands (seed {}):", hands, base_seed)?;
    writeln!(out, "  {} seats won {:.1}", family_a, wins_a)?;
    writeln!(out, "  {} seats won {:.1}", family_b, wins_b)?;
    Ok(())
}
