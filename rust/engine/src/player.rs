use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// A seat's table position for the current hand, reassigned every hand as
/// the button rotates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Holds the dealer button
    Dealer,
    /// Posts the small blind
    SmallBlind,
    /// Posts the big blind
    BigBlind,
    /// No position marker this hand
    Neutral,
}

/// A seat at the table: identity, chip stack, current-street commitment,
/// hole cards, and per-hand flags.
///
/// The chip stack persists across hands; everything else is reset by
/// [`Seat::reset_for_hand`] when a new hand begins. A folded or zero-chip
/// seat never places further bets in the same hand (the round engine skips
/// it and [`Seat::place_bet`] refuses overdrafts).
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    stack: u32,
    current_bet: u32,
    hole: [Option<Card>; 2],
    folded: bool,
    position: Position,
}

impl Seat {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            current_bet: 0,
            hole: [None, None],
            folded: false,
            position: Position::Neutral,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.stack
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(GameError::HoleCardsFull)
        }
    }

    /// Commit `amount` additional chips to the current street.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientChips`] when `amount` exceeds the stack; the
    /// seat is left untouched.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.current_bet += amount;
        Ok(())
    }

    /// Folding is monotonic within a hand; only `reset_for_hand` clears it.
    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Clear all per-hand state. The stack carries over.
    pub fn reset_for_hand(&mut self) {
        self.hole = [None, None];
        self.current_bet = 0;
        self.folded = false;
        self.position = Position::Neutral;
    }

    pub(crate) fn take_current_bet(&mut self) -> u32 {
        std::mem::take(&mut self.current_bet)
    }

    pub(crate) fn clear_current_bet(&mut self) {
        self.current_bet = 0;
    }
}
