use crate::errors::GameError;
use crate::player::Seat;

/// The betting engine: owns the pot and the street's highest bet.
///
/// The table never owns seats — it operates on the orchestrator's seat
/// slice, so chip and bet mutations are visible to every component that
/// shares it.
#[derive(Debug, Default)]
pub struct Table {
    pot: u32,
    current_bet: u32,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    /// The street's highest committed amount.
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Raise seat `idx`'s street commitment to `total` chips.
    ///
    /// A `total` below the street's highest bet is only accepted when it
    /// commits the seat's entire remaining stack (an all-in call for less).
    /// The street's highest bet is raised when `total` exceeds it.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalBet`] when `total` is under the street's highest
    /// bet without being an all-in, or under the seat's own commitment (no
    /// negative increments); [`GameError::InsufficientChips`] when the
    /// increment exceeds the stack. The seat and the pot are untouched on
    /// every error path.
    pub fn apply_bet(
        &mut self,
        seats: &mut [Seat],
        idx: usize,
        total: u32,
    ) -> Result<(), GameError> {
        let seat = &mut seats[idx];
        if total < seat.current_bet() {
            return Err(GameError::IllegalBet {
                requested: total,
                minimum: seat.current_bet(),
            });
        }
        let increment = total - seat.current_bet();
        if increment > seat.chips() {
            return Err(GameError::InsufficientChips {
                requested: increment,
                available: seat.chips(),
            });
        }
        if total < self.current_bet && increment < seat.chips() {
            return Err(GameError::IllegalBet {
                requested: total,
                minimum: self.current_bet,
            });
        }
        seat.place_bet(increment)?;
        if total > self.current_bet {
            self.current_bet = total;
        }
        Ok(())
    }

    /// Move every non-folded seat's street bet into the pot. Idempotent
    /// when nothing is pending. A seat that folded with a live bet keeps it
    /// stranded outside the pot (source behavior, see DESIGN.md).
    pub fn collect_bets(&mut self, seats: &mut [Seat]) {
        for seat in seats.iter_mut() {
            if !seat.is_folded() {
                self.pot += seat.take_current_bet();
            }
        }
    }

    /// Zero the street's highest bet and every seat's commitment. Called
    /// between streets; the pot already holds prior streets' chips.
    pub fn reset_street(&mut self, seats: &mut [Seat]) {
        self.current_bet = 0;
        for seat in seats.iter_mut() {
            seat.clear_current_bet();
        }
    }

    /// Hand-start reset of pot and street bet.
    pub fn reset(&mut self) {
        self.pot = 0;
        self.current_bet = 0;
    }

    /// Split the pot into equal integer shares for `winners`. The odd
    /// remainder is dropped, not tracked (source behavior, see DESIGN.md).
    pub fn distribute(&mut self, seats: &mut [Seat], winners: &[usize]) {
        debug_assert!(!winners.is_empty(), "distribute needs at least one winner");
        if winners.is_empty() {
            return;
        }
        let share = self.pot / winners.len() as u32;
        for &w in winners {
            seats[w].add_chips(share);
        }
        self.pot = 0;
    }
}
