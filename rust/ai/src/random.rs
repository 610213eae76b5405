//! Weighted random seat behavior, seeded for reproducible simulations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use holdem_engine::strategy::{DecisionView, SeatAction, Strategy};

/// Folds, checks, calls, and raises with fixed weights, never requesting an
/// amount the rules would reject.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
        if view.call_amount == 0 {
            // free street: mostly check, occasionally open
            if view.chips > 0 && self.rng.random_bool(0.25) {
                let cap = view.chips.min(view.pot.max(view.highest_bet).max(10));
                return SeatAction::Bet(self.rng.random_range(1..=cap));
            }
            return SeatAction::Check;
        }

        if view.call_amount >= view.chips {
            return if self.rng.random_bool(0.5) {
                SeatAction::AllIn
            } else {
                SeatAction::Fold
            };
        }

        match self.rng.random_range(0..100) {
            0..20 => SeatAction::Fold,
            20..85 => SeatAction::Call,
            _ => {
                let headroom = view.chips - view.call_amount;
                SeatAction::Raise(self.rng.random_range(1..=headroom))
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::{Card, Rank, Suit};
    use holdem_engine::game::Street;

    fn view(chips: u32, call_amount: u32) -> DecisionView<'static> {
        DecisionView {
            street: Street::Preflop,
            highest_bet: call_amount,
            call_amount,
            chips,
            current_bet: 0,
            pot: 30,
            hole: [
                Some(Card {
                    rank: Rank::Nine,
                    suit: Suit::Hearts,
                }),
                Some(Card {
                    rank: Rank::Four,
                    suit: Suit::Clubs,
                }),
            ],
            community: &[],
        }
    }

    #[test]
    fn same_seed_same_decisions() {
        let mut a = RandomStrategy::new(99);
        let mut b = RandomStrategy::new(99);
        for _ in 0..50 {
            assert_eq!(a.decide(&view(1000, 50)), b.decide(&view(1000, 50)));
        }
    }

    #[test]
    fn short_stack_facing_bet_shoves_or_folds() {
        let mut s = RandomStrategy::new(3);
        for _ in 0..50 {
            let action = s.decide(&view(40, 100));
            assert!(matches!(action, SeatAction::AllIn | SeatAction::Fold));
        }
    }

    #[test]
    fn raises_stay_within_the_stack() {
        let mut s = RandomStrategy::new(11);
        for _ in 0..200 {
            match s.decide(&view(500, 100)) {
                SeatAction::Raise(amount) => assert!(amount >= 1 && amount <= 400),
                SeatAction::Bet(amount) => assert!(amount >= 1 && amount <= 500),
                _ => {}
            }
        }
    }
}
