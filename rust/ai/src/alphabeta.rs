//! The expected-value heuristic behind an alpha-beta-shaped action loop.
//!
//! Decision-for-decision identical to [`crate::minimax`]: the same three
//! actions, the same fixed formulas, no recursion. The alpha/beta window is
//! carried around the loop but with only one ply and an unbounded beta it
//! never prunes; it is kept because the behavior being reproduced keeps it.

use holdem_engine::strategy::{DecisionView, SeatAction, Strategy};

use crate::strength::{estimate_strength, ev_all_in, ev_fold, ev_post_call, ev_raise};

#[derive(Debug, Default)]
pub struct AlphaBetaStrategy;

impl AlphaBetaStrategy {
    fn raise_amount(view: &DecisionView<'_>) -> u32 {
        (view.chips - view.call_amount).min(view.call_amount.max(5))
    }

    fn value_of(action: SeatAction, strength: f64) -> f64 {
        match action {
            SeatAction::Fold => ev_fold(),
            SeatAction::Call => ev_post_call(strength),
            _ => ev_raise(strength),
        }
    }
}

impl Strategy for AlphaBetaStrategy {
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
        let strength = estimate_strength(view.hole, view.community);

        if view.call_amount >= view.chips {
            return if ev_all_in(strength) >= ev_fold() {
                SeatAction::AllIn
            } else {
                SeatAction::Fold
            };
        }

        let actions = [
            SeatAction::Fold,
            SeatAction::Call,
            SeatAction::Raise(Self::raise_amount(view)),
        ];

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = SeatAction::Fold;

        for action in actions {
            let value = Self::value_of(action, strength);
            if value > best_value {
                best_value = value;
                best_action = action;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        best_action
    }

    fn name(&self) -> &str {
        "alphabeta"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::MinimaxStrategy;
    use holdem_engine::cards::{Card, Rank, Suit};
    use holdem_engine::game::Street;

    fn c(suit: Suit, rank: Rank) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn agrees_with_the_minimax_heuristic() {
        let holes = [
            [
                Some(c(Suit::Hearts, Rank::Ace)),
                Some(c(Suit::Spades, Rank::Ace)),
            ],
            [
                Some(c(Suit::Hearts, Rank::Seven)),
                Some(c(Suit::Spades, Rank::Two)),
            ],
        ];
        let community = vec![
            c(Suit::Diamonds, Rank::Nine),
            c(Suit::Clubs, Rank::Jack),
            c(Suit::Hearts, Rank::Four),
        ];

        for hole in holes {
            for (chips, call_amount) in [(1000, 100), (80, 100), (500, 0)] {
                let view = DecisionView {
                    street: Street::Flop,
                    highest_bet: call_amount,
                    call_amount,
                    chips,
                    current_bet: 0,
                    pot: 0,
                    hole,
                    community: &community,
                };
                assert_eq!(
                    AlphaBetaStrategy.decide(&view),
                    MinimaxStrategy.decide(&view)
                );
            }
        }
    }
}
