//! Card and board formatters for terminal display.

use holdem_engine::cards::{Card, Rank, Suit};

pub fn format_suit(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "♣",
        Suit::Diamonds => "♦",
        Suit::Hearts => "♥",
        Suit::Spades => "♠",
    }
}

pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

/// Short form like "A♠".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// A bracketed board like "[A♠ K♥ 7♦]".
pub fn format_board(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cards_and_boards() {
        let ace = Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        };
        let ten = Card {
            rank: Rank::Ten,
            suit: Suit::Hearts,
        };
        assert_eq!(format_card(&ace), "A♠");
        assert_eq!(format_board(&[ace, ten]), "[A♠ T♥]");
        assert_eq!(format_board(&[]), "[]");
    }
}
