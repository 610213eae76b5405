use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::dealer::Dealer;
use crate::errors::GameError;
use crate::hand::best_among;
use crate::player::{Position, Seat};
use crate::rules::{validate_action, ValidatedAction};
use crate::strategy::{DecisionView, Strategy};
use crate::table::Table;

/// A betting street in Texas Hold'em, strictly increasing within a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop (hole cards only)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
}

/// How a hand ended: who won, what they shared, and how far it went.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// Seat indices of the winner(s); empty when every seat folded
    pub winners: Vec<usize>,
    /// The pot that was shared out (before integer splitting)
    pub pot_awarded: u32,
    /// Last street that was bet
    pub street_reached: Street,
    /// True when the hand was decided by evaluation rather than folds
    pub showdown: bool,
}

/// The round orchestrator: owns the seats, their strategies, the dealer and
/// the betting table for the duration of a hand, and drives the state
/// machine `Setup → Positions → Blinds → Betting(street)/[default win] →
/// Showdown → ButtonRotate`.
///
/// Everything is single-threaded and synchronous: each seat's
/// [`Strategy::decide`] is a blocking request/response, and no two hands
/// ever overlap on one `Game`. Run independent `Game` values for parallel
/// simulation; nothing is shared between them.
pub struct Game {
    seats: Vec<Seat>,
    strategies: Vec<Box<dyn Strategy>>,
    dealer: Dealer,
    table: Table,
    button_position: usize,
    small_blind: u32,
    big_blind: u32,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategies: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("Game")
            .field("seats", &self.seats)
            .field("strategies", &strategies)
            .field("button_position", &self.button_position)
            .field("pot", &self.table.pot())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// # Errors
    ///
    /// Configuration problems are fatal at construction:
    /// [`GameError::TooFewSeats`] below 2 seats,
    /// [`GameError::MismatchedStrategies`] when seats and strategies differ
    /// in number, [`GameError::InvalidDeckCount`] for a zero-deck shoe.
    pub fn new(
        seats: Vec<Seat>,
        strategies: Vec<Box<dyn Strategy>>,
        num_decks: usize,
    ) -> Result<Self, GameError> {
        Self::build(seats, strategies, Dealer::new(num_decks)?)
    }

    /// Deterministic variant: the shoe is seeded, so identical seats,
    /// strategies and seed replay the identical hand.
    pub fn with_seed(
        seats: Vec<Seat>,
        strategies: Vec<Box<dyn Strategy>>,
        num_decks: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::build(seats, strategies, Dealer::with_seed(num_decks, seed)?)
    }

    fn build(
        seats: Vec<Seat>,
        strategies: Vec<Box<dyn Strategy>>,
        dealer: Dealer,
    ) -> Result<Self, GameError> {
        if seats.len() < 2 {
            return Err(GameError::TooFewSeats { seats: seats.len() });
        }
        if seats.len() != strategies.len() {
            return Err(GameError::MismatchedStrategies {
                seats: seats.len(),
                strategies: strategies.len(),
            });
        }
        Ok(Self {
            seats,
            strategies,
            dealer,
            table: Table::new(),
            button_position: 0,
            small_blind: 0,
            big_blind: 0,
        })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn community(&self) -> &[Card] {
        self.dealer.community()
    }
    pub fn pot(&self) -> u32 {
        self.table.pot()
    }
    pub fn button_position(&self) -> usize {
        self.button_position
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    /// Play one full hand: deal, bet four streets with default-win
    /// checkpoints, resolve, and rotate the button. The button rotates
    /// exactly once per hand on every exit path.
    pub fn play_hand(&mut self) -> Result<HandOutcome, GameError> {
        let result = self.run_hand();
        self.rotate_button();
        result
    }

    fn run_hand(&mut self) -> Result<HandOutcome, GameError> {
        self.setup_hand()?;
        self.assign_positions();
        self.compute_blinds();
        self.post_blinds()?;

        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            match street {
                Street::Preflop => {}
                Street::Flop => self.dealer.deal_community(3)?,
                Street::Turn | Street::River => self.dealer.deal_community(1)?,
            }
            if street != Street::Preflop {
                debug!(?street, community = ?self.dealer.community(), "community dealt");
            }
            self.betting_round(street)?;
            if let Some(outcome) = self.default_winner_outcome(street) {
                return Ok(outcome);
            }
        }

        self.showdown()
    }

    /// Hand-start reset: reshuffled shoe, cleared board and pot, fresh
    /// per-seat state, then two hole cards to every seat in two passes.
    pub fn setup_hand(&mut self) -> Result<(), GameError> {
        self.dealer.reset();
        self.table.reset();
        for seat in &mut self.seats {
            seat.reset_for_hand();
        }
        self.dealer.deal_hole_cards(&mut self.seats)
    }

    /// Tag Dealer/SB/BB from the current button index; everyone else is
    /// neutral. With two seats the button seat doubles as the big blind
    /// (assignment order matches the source).
    pub fn assign_positions(&mut self) {
        let n = self.seats.len();
        for seat in &mut self.seats {
            seat.set_position(Position::Neutral);
        }
        self.seats[self.button_position].set_position(Position::Dealer);
        self.seats[(self.button_position + 1) % n].set_position(Position::SmallBlind);
        self.seats[(self.button_position + 2) % n].set_position(Position::BigBlind);
        info!(
            button = %self.seats[self.button_position].name(),
            small_blind = %self.seats[(self.button_position + 1) % n].name(),
            big_blind = %self.seats[(self.button_position + 2) % n].name(),
            "positions assigned"
        );
    }

    /// Dynamic blinds off the shortest live stack: small blind is 10% of it
    /// (at least 1 chip), big blind twice that.
    pub fn compute_blinds(&mut self) -> (u32, u32) {
        let lowest = self
            .seats
            .iter()
            .map(Seat::chips)
            .filter(|&c| c > 0)
            .min()
            .unwrap_or(0);
        self.small_blind = (lowest / 10).max(1);
        self.big_blind = self.small_blind * 2;
        info!(
            lowest_stack = lowest,
            small_blind = self.small_blind,
            big_blind = self.big_blind,
            "blinds computed"
        );
        (self.small_blind, self.big_blind)
    }

    /// Post both blinds, capped at the poster's stack (an all-in blind is
    /// allowed), and collect them straight into the pot. The preflop
    /// betting round then starts from a zero street bet.
    pub fn post_blinds(&mut self) -> Result<(), GameError> {
        for (position, blind) in [
            (Position::SmallBlind, self.small_blind),
            (Position::BigBlind, self.big_blind),
        ] {
            if let Some(seat) = self
                .seats
                .iter_mut()
                .find(|s| s.position() == position && s.chips() > 0)
            {
                let amount = blind.min(seat.chips());
                seat.place_bet(amount)?;
                info!(seat = %seat.name(), amount, ?position, "blind posted");
            }
        }
        self.table.collect_bets(&mut self.seats);
        Ok(())
    }

    /// Run one street's betting: full passes over the seats until every
    /// active seat matches the highest bet, a full pass changes nothing
    /// (all-in stall guard), or at most one active seat remains. Collects
    /// street bets into the pot before returning.
    pub fn betting_round(&mut self, street: Street) -> Result<(), GameError> {
        self.table.reset_street(&mut self.seats);
        let n = self.seats.len();
        let start = self.first_to_act(street);
        debug!(?street, opener = %self.seats[start].name(), "betting round begins");

        loop {
            let mut bet_changed = false;

            for offset in 0..n {
                let idx = (start + offset) % n;
                if self.seats[idx].is_folded() || self.seats[idx].chips() == 0 {
                    continue;
                }
                // once a live bet exists there is nothing left to respond
                // to when everyone has matched it; before any bet, every
                // seat still gets its turn
                if self.table.current_bet() > 0 && self.all_bets_matched() {
                    break;
                }
                let before = self.seats[idx].current_bet();
                self.solicit_action(street, idx)?;
                if self.seats[idx].current_bet() != before {
                    bet_changed = true;
                }
            }

            if self.all_bets_matched() || !bet_changed || self.active_seats() <= 1 {
                break;
            }
        }

        self.table.collect_bets(&mut self.seats);
        debug!(?street, pot = self.table.pot(), "betting round complete");
        Ok(())
    }

    /// Preflop action opens left of the big blind; every later street opens
    /// left of the button.
    fn first_to_act(&self, street: Street) -> usize {
        let n = self.seats.len();
        if street == Street::Preflop {
            let bb = self
                .seats
                .iter()
                .position(|s| s.position() == Position::BigBlind)
                .unwrap_or(0);
            (bb + 1) % n
        } else {
            (self.button_position + 1) % n
        }
    }

    fn solicit_action(&mut self, street: Street, idx: usize) -> Result<(), GameError> {
        let highest = self.table.current_bet();
        let call_amount = highest.saturating_sub(self.seats[idx].current_bet());
        let view = DecisionView {
            street,
            highest_bet: highest,
            call_amount,
            chips: self.seats[idx].chips(),
            current_bet: self.seats[idx].current_bet(),
            pot: self.table.pot(),
            hole: self.seats[idx].hole_cards(),
            community: self.dealer.community(),
        };
        let action = self.strategies[idx].decide(&view);

        let validated = match validate_action(self.seats[idx].chips(), call_amount, action) {
            Ok(v) => v,
            Err(e) => {
                // rejected before any mutation; the fallback is a forced fold
                warn!(seat = %self.seats[idx].name(), error = %e, "illegal action, seat folds");
                self.seats[idx].fold();
                return Ok(());
            }
        };

        let increment = match validated {
            ValidatedAction::Fold => {
                debug!(seat = %self.seats[idx].name(), "folds");
                self.seats[idx].fold();
                return Ok(());
            }
            ValidatedAction::Check => {
                debug!(seat = %self.seats[idx].name(), "checks");
                return Ok(());
            }
            ValidatedAction::Call(amount)
            | ValidatedAction::Bet(amount)
            | ValidatedAction::Raise(amount)
            | ValidatedAction::AllIn(amount) => amount,
        };
        if increment == 0 {
            return Ok(());
        }

        let total = self.seats[idx].current_bet() + increment;
        self.table.apply_bet(&mut self.seats, idx, total)?;
        debug!(
            seat = %self.seats[idx].name(),
            total,
            street_bet = self.table.current_bet(),
            "bet placed"
        );
        Ok(())
    }

    /// The hand ends early when at most one seat is still unfolded: a lone
    /// survivor takes the whole pot without further streets; zero survivors
    /// end the hand with no distribution.
    fn default_winner_outcome(&mut self, street: Street) -> Option<HandOutcome> {
        let unfolded: Vec<usize> = (0..self.seats.len())
            .filter(|&i| !self.seats[i].is_folded())
            .collect();
        match unfolded.len() {
            1 => {
                let pot = self.table.pot();
                self.table.distribute(&mut self.seats, &unfolded);
                info!(
                    winner = %self.seats[unfolded[0]].name(),
                    pot,
                    ?street,
                    "wins by default, everyone else folded"
                );
                Some(HandOutcome {
                    winners: unfolded,
                    pot_awarded: pot,
                    street_reached: street,
                    showdown: false,
                })
            }
            0 => {
                warn!("every seat folded; the pot is not distributed");
                Some(HandOutcome {
                    winners: Vec::new(),
                    pot_awarded: 0,
                    street_reached: street,
                    showdown: false,
                })
            }
            _ => None,
        }
    }

    fn showdown(&mut self) -> Result<HandOutcome, GameError> {
        let winners = best_among(&self.seats, self.dealer.community())?;
        let pot = self.table.pot();
        if winners.is_empty() {
            return Ok(HandOutcome {
                winners,
                pot_awarded: 0,
                street_reached: Street::River,
                showdown: true,
            });
        }
        self.table.distribute(&mut self.seats, &winners);
        let names: Vec<&str> = winners.iter().map(|&w| self.seats[w].name()).collect();
        info!(winners = ?names, pot, "showdown");
        Ok(HandOutcome {
            winners,
            pot_awarded: pot,
            street_reached: Street::River,
            showdown: true,
        })
    }

    fn rotate_button(&mut self) {
        self.button_position = (self.button_position + 1) % self.seats.len();
        debug!(button_position = self.button_position, "button rotated");
    }

    fn all_bets_matched(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| !s.is_folded() && s.chips() > 0)
            .all(|s| s.current_bet() >= self.table.current_bet())
    }

    fn active_seats(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| !s.is_folded() && s.chips() > 0)
            .count()
    }
}
