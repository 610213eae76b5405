use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::GameError;
use crate::player::Seat;

/// The ten hand categories, weakest to strongest. Discriminants double as
/// the category's strength value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        write!(f, "{}", name)
    }
}

/// Total-ordered ranking key for a hand: category first, then the
/// category-specific tiebreak ranks, high to low. Equal keys are an exact
/// tie.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Rank a set of 5 to 7 cards: the result equals the maximum over every
/// 5-card subset, and is invariant to input order.
///
/// # Errors
///
/// [`GameError::NotEnoughCards`] below 5 cards — a phase-sequencing
/// invariant violation, not a recoverable condition.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, GameError> {
    if cards.len() < 5 {
        return Err(GameError::NotEnoughCards {
            available: cards.len(),
        });
    }

    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in cards {
        let r = c.rank as u8;
        rank_counts[r as usize] += 1;
        let s = suit_index(c.suit);
        suit_counts[s] += 1;
        by_suit[s].push(r);
    }

    let flush_suit = suit_counts.iter().position(|&n| n >= 5);

    // Straight flush first: scan the distinct ranks of the whole flush
    // suit, so a low straight flush is not masked by higher offsuit cards.
    if let Some(s) = flush_suit {
        let mut distinct = by_suit[s].clone();
        distinct.sort_unstable();
        distinct.dedup();
        if let Some(high) = detect_straight_high(&distinct) {
            let category = if high == 14 {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return Ok(HandRank {
                category,
                kickers: [high, 0, 0, 0, 0],
            });
        }
    }

    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return Ok(HandRank {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        });
    }

    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return Ok(HandRank {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        });
    }

    // Flush: the 5 highest of the suit are the hand.
    if let Some(s) = flush_suit {
        let mut suited = by_suit[s].clone();
        suited.sort_unstable_by(|a, b| b.cmp(a));
        let mut k = [0u8; 5];
        k.copy_from_slice(&suited[..5]);
        return Ok(HandRank {
            category: Category::Flush,
            kickers: k,
        });
    }

    // Straight over the distinct rank set: pairs among 7 cards must not
    // break the run scan.
    let distinct = distinct_ranks_ascending(&rank_counts);
    if let Some(high) = detect_straight_high(&distinct) {
        return Ok(HandRank {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        });
    }

    let trips = ranks_with_count(&rank_counts, 3);
    let pairs = ranks_with_count(&rank_counts, 2);

    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        for (slot, r) in remaining_desc(&rank_counts, &[t]).take(2).enumerate() {
            k[slot + 1] = r;
        }
        return Ok(HandRank {
            category: Category::ThreeOfAKind,
            kickers: k,
        });
    }

    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let kicker = remaining_desc(&rank_counts, &[high, low]).next().unwrap_or(0);
        return Ok(HandRank {
            category: Category::TwoPair,
            kickers: [high, low, kicker, 0, 0],
        });
    }

    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (slot, r) in remaining_desc(&rank_counts, &[p]).take(3).enumerate() {
            k[slot + 1] = r;
        }
        return Ok(HandRank {
            category: Category::OnePair,
            kickers: k,
        });
    }

    let mut k = [0u8; 5];
    for (slot, r) in remaining_desc(&rank_counts, &[]).take(5).enumerate() {
        k[slot] = r;
    }
    Ok(HandRank {
        category: Category::HighCard,
        kickers: k,
    })
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Indices of every non-folded seat whose best hand ties for the maximum
/// over hole + community cards. Empty when every seat has folded.
///
/// # Errors
///
/// [`GameError::NotEnoughCards`] when a contending seat cannot assemble 5
/// cards — showdown was reached with an incomplete board.
pub fn best_among(seats: &[Seat], community: &[Card]) -> Result<Vec<usize>, GameError> {
    let mut best: Option<HandRank> = None;
    let mut winners: Vec<usize> = Vec::new();

    for (idx, seat) in seats.iter().enumerate() {
        if seat.is_folded() {
            continue;
        }
        let mut cards: Vec<Card> = community.to_vec();
        cards.extend(seat.hole_cards().into_iter().flatten());
        let rank = evaluate_hand(&cards)?;

        match best.as_ref().map(|b| rank.cmp(b)) {
            None | Some(Ordering::Greater) => {
                best = Some(rank);
                winners.clear();
                winners.push(idx);
            }
            Some(Ordering::Equal) => winners.push(idx),
            Some(Ordering::Less) => {}
        }
    }

    Ok(winners)
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

// Input must be ascending and distinct. Ace counts below Two here only,
// never as a kicker; a wheel reports its high card as 5.
fn detect_straight_high(distinct_ascending: &[u8]) -> Option<u8> {
    if distinct_ascending.is_empty() {
        return None;
    }
    let mut v = distinct_ascending.to_vec();
    if v.binary_search(&14).is_ok() {
        v.insert(0, 1);
    }

    let mut run = 1;
    let mut best = None;
    for i in 1..v.len() {
        if v[i] == v[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best = Some(v[i]);
            }
        } else {
            run = 1;
        }
    }
    best
}

fn distinct_ranks_ascending(rank_counts: &[u8; 15]) -> Vec<u8> {
    (2..=14u8).filter(|&r| rank_counts[r as usize] > 0).collect()
}

fn ranks_with_count(rank_counts: &[u8; 15], count: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] == count)
        .collect()
}

// Ranks still present after excluding `used`, highest first. Feeds kicker
// slots, so excluded ranks are the ones already consumed by the category.
fn remaining_desc<'a>(
    rank_counts: &'a [u8; 15],
    used: &'a [u8],
) -> impl Iterator<Item = u8> + 'a {
    (2..=14u8)
        .rev()
        .filter(move |&r| rank_counts[r as usize] > 0 && !used.contains(&r))
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] >= 4)?;
    let kicker = remaining_desc(rank_counts, std::slice::from_ref(&quad))
        .next()
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trips = ranks_with_count(rank_counts, 3);
    let t = *trips.first()?;
    // a second set fills the pair slot with its higher rank
    if let Some(&second) = trips.get(1) {
        return Some((t, second));
    }
    let pairs = ranks_with_count(rank_counts, 2);
    pairs.first().map(|&p| (t, p))
}
