//! Single-ply expected-value strategy.
//!
//! Scores fold, call, and raise against a static strength estimate and
//! plays the best-scoring action. The raise branch is valued by the worst
//! of three canned opponent replies; there is no recursion and no opponent
//! model beyond those constants.

use holdem_engine::strategy::{DecisionView, SeatAction, Strategy};

use crate::strength::{estimate_strength, ev_all_in, ev_fold, ev_post_call, ev_raise};

#[derive(Debug, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Raise sizing: at least 5 chips, at most what the stack leaves after
    /// calling, otherwise matching the call.
    fn raise_amount(view: &DecisionView<'_>) -> u32 {
        (view.chips - view.call_amount).min(view.call_amount.max(5))
    }
}

impl Strategy for MinimaxStrategy {
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
        let strength = estimate_strength(view.hole, view.community);

        // Calling would consume the stack: the choice degenerates to
        // all-in or fold.
        if view.call_amount >= view.chips {
            return if ev_all_in(strength) >= ev_fold() {
                SeatAction::AllIn
            } else {
                SeatAction::Fold
            };
        }

        let scored = [
            (SeatAction::Fold, ev_fold()),
            (SeatAction::Call, ev_post_call(strength)),
            (SeatAction::Raise(Self::raise_amount(view)), ev_raise(strength)),
        ];

        let mut best = scored[0];
        for &candidate in &scored[1..] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::{Card, Rank, Suit};
    use holdem_engine::game::Street;

    fn c(suit: Suit, rank: Rank) -> Card {
        Card { rank, suit }
    }

    fn view<'a>(
        hole: [Option<Card>; 2],
        community: &'a [Card],
        chips: u32,
        call_amount: u32,
    ) -> DecisionView<'a> {
        DecisionView {
            street: Street::Flop,
            highest_bet: call_amount,
            call_amount,
            chips,
            current_bet: 0,
            pot: 0,
            hole,
            community,
        }
    }

    fn strong_hole() -> [Option<Card>; 2] {
        [
            Some(c(Suit::Hearts, Rank::Ace)),
            Some(c(Suit::Spades, Rank::Ace)),
        ]
    }

    fn strong_board() -> Vec<Card> {
        vec![
            c(Suit::Diamonds, Rank::Ace),
            c(Suit::Clubs, Rank::Ace),
            c(Suit::Hearts, Rank::King),
        ]
    }

    fn weak_hole() -> [Option<Card>; 2] {
        [
            Some(c(Suit::Hearts, Rank::Seven)),
            Some(c(Suit::Spades, Rank::Two)),
        ]
    }

    fn weak_board() -> Vec<Card> {
        vec![
            c(Suit::Diamonds, Rank::Nine),
            c(Suit::Clubs, Rank::Jack),
            c(Suit::Hearts, Rank::Four),
        ]
    }

    #[test]
    fn strong_hand_calls() {
        let board = strong_board();
        let action = MinimaxStrategy.decide(&view(strong_hole(), &board, 1000, 100));
        assert_eq!(action, SeatAction::Call);
    }

    #[test]
    fn weak_hand_folds() {
        let board = weak_board();
        let action = MinimaxStrategy.decide(&view(weak_hole(), &board, 1000, 100));
        assert_eq!(action, SeatAction::Fold);
    }

    #[test]
    fn stack_consuming_call_with_strong_hand_shoves() {
        let board = strong_board();
        let action = MinimaxStrategy.decide(&view(strong_hole(), &board, 80, 100));
        assert_eq!(action, SeatAction::AllIn);
    }

    #[test]
    fn stack_consuming_call_with_weak_hand_folds() {
        let board = weak_board();
        let action = MinimaxStrategy.decide(&view(weak_hole(), &board, 80, 100));
        assert_eq!(action, SeatAction::Fold);
    }
}
