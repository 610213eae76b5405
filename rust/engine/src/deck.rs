use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A draw pile of one or more 52-card decks (a "shoe").
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    num_decks: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Build a shoe of `num_decks` decks seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDeckCount`] when `num_decks` is zero; the
    /// multiplier is a construction-time configuration value, never recovered
    /// mid-hand.
    pub fn new(num_decks: usize) -> Result<Self, GameError> {
        Self::with_seed(num_decks, rand::random())
    }

    /// Build a shoe with a fixed seed. The same seed always produces the
    /// same shuffle order.
    pub fn with_seed(num_decks: usize, seed: u64) -> Result<Self, GameError> {
        if num_decks < 1 {
            return Err(GameError::InvalidDeckCount { decks: num_decks });
        }
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Ok(Self {
            cards: shoe(num_decks),
            position: 0,
            num_decks,
            rng,
        })
    }

    pub fn shuffle(&mut self) {
        self.cards = shoe(self.num_decks);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn burn(&mut self) {
        let _ = self.draw();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

fn shoe(num_decks: usize) -> Vec<Card> {
    let mut v = Vec::with_capacity(num_decks * 52);
    for _ in 0..num_decks {
        v.extend(full_deck());
    }
    v
}
