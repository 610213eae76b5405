//! # holdem-ai: Seat Strategies for the Hold'em Simulator
//!
//! Decision-strategy implementations for the round engine's
//! [`Strategy`](holdem_engine::strategy::Strategy) contract, plus a factory
//! for creating them by name.
//!
//! ## Strategies
//!
//! - [`random::RandomStrategy`] - weighted random fold/check/call/raise
//! - [`scripted::CallingStrategy`] - always checks or calls
//! - [`scripted::ScriptedStrategy`] - replays a fixed action queue
//! - [`minimax::MinimaxStrategy`] - single-ply expected-value heuristic
//! - [`alphabeta::AlphaBetaStrategy`] - the same heuristic behind an
//!   alpha-beta-shaped action loop
//!
//! The two search-flavored strategies are deliberately shallow: they score
//! three fixed actions against a static hand-strength estimate and never
//! recurse into an opponent model.
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_strategy;
//! use holdem_engine::strategy::Strategy;
//!
//! let strategy = create_strategy("minimax", 0);
//! assert_eq!(strategy.name(), "minimax");
//! ```

use holdem_engine::strategy::Strategy;

pub mod alphabeta;
pub mod minimax;
pub mod random;
pub mod scripted;
pub mod strength;

/// Create a strategy by name. `seed` feeds the random strategy; the others
/// are deterministic and ignore it.
///
/// # Panics
///
/// Panics on an unknown strategy name. Supported names: `"random"`,
/// `"calling"`, `"minimax"`, `"alphabeta"`.
pub fn create_strategy(kind: &str, seed: u64) -> Box<dyn Strategy> {
    match kind {
        "random" => Box::new(random::RandomStrategy::new(seed)),
        "calling" => Box::new(scripted::CallingStrategy),
        "minimax" => Box::new(minimax::MinimaxStrategy),
        "alphabeta" => Box::new(alphabeta::AlphaBetaStrategy),
        _ => panic!("Unknown strategy kind: {}", kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_kind() {
        for kind in ["random", "calling", "minimax", "alphabeta"] {
            assert_eq!(create_strategy(kind, 7).name(), kind);
        }
    }

    #[test]
    #[should_panic(expected = "Unknown strategy kind")]
    fn factory_rejects_unknown_kind() {
        let _ = create_strategy("gto", 7);
    }
}
