use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::Seat;

/// Wraps the shoe and owns the community cards for the running hand.
///
/// The dealer is the only component that touches the deck: hole cards go out
/// in two round-robin passes, and every community deal burns one card first.
#[derive(Debug)]
pub struct Dealer {
    deck: Deck,
    community: Vec<Card>,
}

impl Dealer {
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDeckCount`] when `num_decks` is zero.
    pub fn new(num_decks: usize) -> Result<Self, GameError> {
        let mut deck = Deck::new(num_decks)?;
        deck.shuffle();
        Ok(Self {
            deck,
            community: Vec::with_capacity(5),
        })
    }

    /// Deterministic variant for reproducible hands.
    pub fn with_seed(num_decks: usize, seed: u64) -> Result<Self, GameError> {
        let mut deck = Deck::with_seed(num_decks, seed)?;
        deck.shuffle();
        Ok(Self {
            deck,
            community: Vec::with_capacity(5),
        })
    }

    /// Two passes, one card per seat per pass.
    pub fn deal_hole_cards(&mut self, seats: &mut [Seat]) -> Result<(), GameError> {
        for _ in 0..2 {
            for seat in seats.iter_mut() {
                let c = self.deck.draw().ok_or(GameError::DeckExhausted)?;
                seat.give_card(c)?;
            }
        }
        Ok(())
    }

    /// Burn one card, then append `count` cards to the board.
    pub fn deal_community(&mut self, count: usize) -> Result<(), GameError> {
        self.deck.burn();
        for _ in 0..count {
            let c = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            self.community.push(c);
        }
        Ok(())
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Reshuffle the shoe and clear the board for a new hand.
    pub fn reset(&mut self) {
        self.deck.shuffle();
        self.community.clear();
    }
}
