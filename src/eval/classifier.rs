//! Five-card hand classification.
//!
//! The classifier builds rank counts and a rank bitmask in fixed-size arrays
//! and then walks the categories in precedence order. It never allocates, so
//! it can sit in the inner loop of the expected-value search.

use crate::cards::hand::five_distinct;
use crate::cards::{Card, Hand, HandError, Rank};

use super::category::{Classification, HandCategory};

/// Rank mask of A-2-3-4-5.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Rank mask of 10-J-Q-K-A.
const BROADWAY: u16 = 0b1_1111_0000_0000;

/// Classify five cards.
///
/// Fails if `cards` is not exactly five distinct cards.
pub fn classify(cards: &[Card]) -> Result<Classification, HandError> {
    let cards = five_distinct(cards)?;
    Ok(evaluate(&cards).into())
}

/// Classify a validated hand.
pub fn classify_hand(hand: &Hand) -> Classification {
    evaluate(hand.cards()).into()
}

/// Evaluate five distinct cards.
///
/// Distinctness is the caller's responsibility; it is only checked in debug
/// builds.
#[inline]
pub fn evaluate(cards: &[Card; 5]) -> HandCategory {
    debug_assert!(
        cards.iter().fold(0u64, |m, c| m | c.mask()).count_ones() == 5,
        "cards must be distinct"
    );

    let mut rank_counts = [0u8; 13];
    let mut rank_bits = 0u16;
    let first_suit = cards[0].suit();
    let mut is_flush = true;

    for card in cards {
        let rank = card.rank() as usize;
        rank_counts[rank] += 1;
        rank_bits |= 1 << rank;
        is_flush &= card.suit() == first_suit;
    }

    let is_straight = is_straight(rank_bits);

    if is_flush && rank_bits == BROADWAY {
        return HandCategory::RoyalFlush;
    }
    if is_flush && is_straight {
        return HandCategory::StraightFlush;
    }

    // Tally how many ranks occur once, twice, three and four times.
    let mut groups = [0u8; 5];
    for &count in &rank_counts {
        groups[count as usize] += 1;
    }

    if groups[4] > 0 {
        return HandCategory::FourOfAKind;
    }
    if groups[3] == 1 && groups[2] == 1 {
        return HandCategory::FullHouse;
    }
    if is_flush {
        return HandCategory::Flush;
    }
    if is_straight {
        return HandCategory::Straight;
    }
    if groups[3] > 0 {
        return HandCategory::ThreeOfAKind;
    }
    if groups[2] >= 2 {
        return HandCategory::TwoPair;
    }
    if groups[2] == 1 {
        let paired = rank_counts.iter().position(|&c| c == 2).unwrap_or(0);
        if paired >= Rank::Jack as usize {
            return HandCategory::JacksOrBetter;
        }
    }

    HandCategory::NoSpecialHand
}

/// Check whether a rank mask is five consecutive ranks.
///
/// Only masks with exactly five ranks qualify, so any pair rules a straight
/// out. Ace plays high, or low in A-2-3-4-5 only.
#[inline]
fn is_straight(rank_bits: u16) -> bool {
    if rank_bits.count_ones() != 5 {
        return false;
    }
    if rank_bits == WHEEL {
        return true;
    }
    rank_bits >> rank_bits.trailing_zeros() == 0b11111
}
