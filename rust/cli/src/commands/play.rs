//! Play command: interactive hands with one human seat against random AI
//! opponents.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use holdem_engine::game::Game;
use holdem_engine::player::Seat;
use holdem_engine::strategy::Strategy;

use holdem_ai::random::RandomStrategy;

use crate::error::CliError;
use crate::formatters::format_board;
use crate::human::HumanStrategy;
use crate::ui;

pub fn handle_play_command(
    num_seats: usize,
    hands: u32,
    seed: Option<u64>,
    chips: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    if num_seats < 2 {
        ui::write_error(err, "play needs at least 2 seats")?;
        return Err(CliError::InvalidInput("seats must be >= 2".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let quit = Arc::new(AtomicBool::new(false));

    let mut seats = vec![Seat::new("You", chips)];
    let mut strategies: Vec<Box<dyn Strategy>> =
        vec![Box::new(HumanStrategy::new(Arc::clone(&quit)))];
    for i in 1..num_seats {
        seats.push(Seat::new(format!("Bot {}", i), chips));
        strategies.push(Box::new(RandomStrategy::new(seed.wrapping_add(i as u64))));
    }

    let mut game = Game::with_seed(seats, strategies, 1, seed)?;
    writeln!(out, "play: seats={} hands={} seed={}", num_seats, hands, seed)?;

    for hand_no in 1..=hands {
        writeln!(out)?;
        writeln!(out, "=== Hand {} ===", hand_no)?;
        let outcome = game.play_hand()?;

        if !game.community().is_empty() {
            writeln!(out, "Final board: {}", format_board(game.community()))?;
        }
        match outcome.winners.as_slice() {
            [] => writeln!(out, "Everyone folded; the pot goes unclaimed.")?,
            winners => {
                let names: Vec<&str> =
                    winners.iter().map(|&w| game.seats()[w].name()).collect();
                let how = if outcome.showdown {
                    "at showdown"
                } else {
                    "by default"
                };
                writeln!(
                    out,
                    "{} take{} the pot of {} {}",
                    names.join(", "),
                    if names.len() == 1 { "s" } else { "" },
                    outcome.pot_awarded,
                    how
                )?;
            }
        }
        for seat in game.seats() {
            writeln!(out, "  {}: {} chips", seat.name(), seat.chips())?;
        }

        if quit.load(Ordering::Relaxed) {
            writeln!(out, "Quitting after hand {}.", hand_no)?;
            break;
        }
    }
    Ok(())
}
