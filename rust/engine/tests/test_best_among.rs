use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::errors::GameError;
use holdem_engine::hand::best_among;
use holdem_engine::player::Seat;

fn c(s: S, r: R) -> Card {
    Card { rank: r, suit: s }
}

fn seat_with(name: &str, cards: [Card; 2]) -> Seat {
    let mut seat = Seat::new(name, 1000);
    seat.give_card(cards[0]).unwrap();
    seat.give_card(cards[1]).unwrap();
    seat
}

#[test]
fn folded_seats_lose_regardless_of_strength() {
    let community = vec![
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    // seat 0 holds the royal flush but folded
    let mut royal = seat_with("royal", [c(S::Hearts, R::Ace), c(S::Hearts, R::King)]);
    royal.fold();
    // seat 1 holds the straight flush and stayed in
    let straight_flush = seat_with("sf", [c(S::Hearts, R::Eight), c(S::Hearts, R::Nine)]);

    let winners = best_among(&[royal, straight_flush], &community).unwrap();
    assert_eq!(winners, vec![1]);
}

#[test]
fn dominating_board_ties_every_live_seat() {
    let community = vec![
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ];
    let a = seat_with("a", [c(S::Clubs, R::Two), c(S::Clubs, R::Three)]);
    let b = seat_with("b", [c(S::Diamonds, R::Four), c(S::Diamonds, R::Five)]);
    let d = seat_with("d", [c(S::Spades, R::Nine), c(S::Spades, R::Six)]);

    let winners = best_among(&[a, b, d], &community).unwrap();
    assert_eq!(winners, vec![0, 1, 2]);
}

#[test]
fn clear_winner_is_a_singleton() {
    let community = vec![
        c(S::Hearts, R::Ten),
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Seven),
        c(S::Spades, R::Two),
    ];
    let trips = seat_with("trips", [c(S::Diamonds, R::Ten), c(S::Clubs, R::Three)]);
    let pair = seat_with("pair", [c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace)]);

    let winners = best_among(&[trips, pair], &community).unwrap();
    assert_eq!(winners, vec![0]);
}

#[test]
fn a_board_full_house_splits_the_pot_between_tied_seats() {
    use holdem_engine::table::Table;

    let community = vec![
        c(S::Hearts, R::King),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Queen),
    ];
    // neither hole improves on the board's kings full of queens
    let a = seat_with("a", [c(S::Clubs, R::Two), c(S::Diamonds, R::Three)]);
    let b = seat_with("b", [c(S::Spades, R::Four), c(S::Clubs, R::Five)]);
    let mut seats = vec![a, b];

    let winners = best_among(&seats, &community).unwrap();
    assert_eq!(winners, vec![0, 1]);

    let mut table = Table::new();
    seats[0].place_bet(150).unwrap();
    seats[1].place_bet(151).unwrap();
    table.collect_bets(&mut seats);
    assert_eq!(table.pot(), 301);

    table.distribute(&mut seats, &winners);
    // 301 / 2 = 150 each, the odd chip is dropped
    assert_eq!(seats[0].chips(), 1000);
    assert_eq!(seats[1].chips(), 999);
    assert_eq!(table.pot(), 0);
}

#[test]
fn all_folded_yields_an_empty_set() {
    let community = vec![
        c(S::Hearts, R::Ten),
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Seven),
        c(S::Spades, R::Two),
    ];
    let mut a = seat_with("a", [c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace)]);
    let mut b = seat_with("b", [c(S::Spades, R::King), c(S::Hearts, R::King)]);
    a.fold();
    b.fold();

    let winners = best_among(&[a, b], &community).unwrap();
    assert!(winners.is_empty());
}

#[test]
fn short_board_is_an_evaluation_error() {
    let a = seat_with("a", [c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace)]);
    let err = best_among(&[a], &[]).unwrap_err();
    assert_eq!(err, GameError::NotEnoughCards { available: 2 });
}
