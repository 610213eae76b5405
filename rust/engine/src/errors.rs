use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Number of decks must be at least 1, got {decks}")]
    InvalidDeckCount { decks: usize },
    #[error("A table needs at least 2 seats, got {seats}")]
    TooFewSeats { seats: usize },
    #[error("{seats} seats but {strategies} strategies")]
    MismatchedStrategies { seats: usize, strategies: usize },
    #[error("Illegal bet of {requested}, minimum required: {minimum}")]
    IllegalBet { requested: u32, minimum: u32 },
    #[error("Bet of {requested} exceeds remaining stack of {available}")]
    InsufficientChips { requested: u32, available: u32 },
    #[error("Hand evaluation needs at least 5 cards, got {available}")]
    NotEnoughCards { available: usize },
    #[error("Shoe ran out of cards while dealing")]
    DeckExhausted,
    #[error("Seat already holds two hole cards")]
    HoleCardsFull,
}
