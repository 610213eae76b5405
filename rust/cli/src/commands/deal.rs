//! Deal command: one complete board for inspection, with every seat's
//! evaluated hand.

use std::io::Write;

use serde::Serialize;

use holdem_engine::cards::Card;
use holdem_engine::dealer::Dealer;
use holdem_engine::hand::{evaluate_hand, HandRank};
use holdem_engine::player::Seat;

use crate::error::CliError;
use crate::formatters::{format_board, format_card};

// 2 hole cards per seat + 5 board cards + 3 burns from one deck
const MAX_DEAL_SEATS: usize = 21;

#[derive(Debug, Serialize)]
struct SeatReport {
    name: String,
    hole: Vec<Card>,
    category: String,
    rank: HandRank,
}

#[derive(Debug, Serialize)]
struct DealReport {
    seed: u64,
    board: Vec<Card>,
    seats: Vec<SeatReport>,
}

pub fn handle_deal_command(
    seed: Option<u64>,
    num_seats: usize,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if num_seats < 1 || num_seats > MAX_DEAL_SEATS {
        return Err(CliError::InvalidInput(format!(
            "seats must be between 1 and {}",
            MAX_DEAL_SEATS
        )));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut dealer = Dealer::with_seed(1, seed)?;
    let mut seats: Vec<Seat> = (1..=num_seats)
        .map(|i| Seat::new(format!("Seat {}", i), 0))
        .collect();

    dealer.deal_hole_cards(&mut seats)?;
    dealer.deal_community(3)?;
    dealer.deal_community(1)?;
    dealer.deal_community(1)?;

    let mut reports = Vec::with_capacity(num_seats);
    for seat in &seats {
        let mut cards: Vec<Card> = dealer.community().to_vec();
        cards.extend(seat.hole_cards().into_iter().flatten());
        let rank = evaluate_hand(&cards)?;
        reports.push(SeatReport {
            name: seat.name().to_string(),
            hole: seat.hole_cards().into_iter().flatten().collect(),
            category: rank.category.to_string(),
            rank,
        });
    }

    if json {
        let report = DealReport {
            seed,
            board: dealer.community().to_vec(),
            seats: reports,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Board: {}", format_board(dealer.community()))?;
    for report in &reports {
        let hole: Vec<String> = report.hole.iter().map(format_card).collect();
        writeln!(
            out,
            "{}: {}  ->  {}",
            report.name,
            hole.join(" "),
            report.category
        )?;
    }
    Ok(())
}
