//! Static hand-strength estimation and the shared expected-value formulas
//! used by the heuristic strategies.

use holdem_engine::cards::Card;
use holdem_engine::hand::{evaluate_hand, Category};

/// Estimate hand strength in (0, 1]: the evaluated category's value scaled
/// by the strongest category. Preflop, where no 5-card hand exists yet, a
/// pocket pair counts as One Pair and anything else as High Card.
pub fn estimate_strength(hole: [Option<Card>; 2], community: &[Card]) -> f64 {
    let cards: Vec<Card> = community
        .iter()
        .copied()
        .chain(hole.into_iter().flatten())
        .collect();

    let category = if cards.len() >= 5 {
        match evaluate_hand(&cards) {
            Ok(rank) => rank.category,
            Err(_) => Category::HighCard,
        }
    } else {
        match (hole[0], hole[1]) {
            (Some(a), Some(b)) if a.rank == b.rank => Category::OnePair,
            _ => Category::HighCard,
        }
    };

    category as u8 as f64 / Category::RoyalFlush as u8 as f64
}

// The fixed single-ply EV formulas keyed off estimated strength. Values are
// in arbitrary chip-flavored units; only their ordering matters.

pub fn ev_fold() -> f64 {
    0.0
}

pub fn ev_all_in(strength: f64) -> f64 {
    300.0 * (strength - 0.5)
}

pub fn ev_post_call(strength: f64) -> f64 {
    200.0 * (strength - 0.5)
}

pub fn ev_opponent_fold(strength: f64) -> f64 {
    150.0 + 150.0 * (strength - 0.5)
}

pub fn ev_opponent_call(strength: f64) -> f64 {
    200.0 * (strength - 0.5)
}

pub fn ev_opponent_reraise(strength: f64) -> f64 {
    200.0 * (strength - 0.5) - 50.0
}

/// The raise branch assumes the opponent answers with whichever reply is
/// worst for us.
pub fn ev_raise(strength: f64) -> f64 {
    ev_opponent_fold(strength)
        .min(ev_opponent_call(strength))
        .min(ev_opponent_reraise(strength))
}
