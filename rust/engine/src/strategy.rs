use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Street;

/// An action a seat may request during a betting round.
/// Amounts are chips for this turn: `Bet(n)` puts in `n` chips total (it
/// must cover the call), `Raise(n)` puts in `n` chips beyond the call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when there is nothing to call)
    Check,
    /// Match the street's highest bet (all-in when the stack is short)
    Call,
    /// Put in this many chips, call included
    Bet(u32),
    /// Put in the call plus this many chips more
    Raise(u32),
    /// Commit the entire remaining stack
    AllIn,
}

/// Everything a strategy is allowed to see when asked to act.
#[derive(Debug)]
pub struct DecisionView<'a> {
    /// The street being bet
    pub street: Street,
    /// The street's highest committed amount
    pub highest_bet: u32,
    /// Chips needed to match `highest_bet` from this seat's commitment
    pub call_amount: u32,
    /// The seat's remaining stack
    pub chips: u32,
    /// The seat's commitment so far this street
    pub current_bet: u32,
    /// The pot collected from earlier streets
    pub pot: u32,
    /// The seat's hole cards
    pub hole: [Option<Card>; 2],
    /// Community cards revealed so far
    pub community: &'a [Card],
}

/// The decision contract between the round engine and a seat.
///
/// The engine suspends the round at exactly one `decide` call at a time and
/// resumes once it returns; implementations must always terminate. The
/// engine reacts only to the returned action — a request the rules reject is
/// converted into a forced fold, so no implementation can corrupt table
/// state.
pub trait Strategy: Send {
    /// Choose an action for the seat described by `view`.
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction;

    /// Identifier used in logs and win tallies.
    fn name(&self) -> &str;
}
