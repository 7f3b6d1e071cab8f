//! Hold subsets of a hand and their canonical enumeration order.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::cards::hand::ensure_distinct;
use crate::cards::{Card, Hand, HandError, HAND_SIZE};

use super::combinations::Combinations;

/// Number of distinct holds for a five-card hand (2^5).
pub const NUM_HOLDS: usize = 1 << HAND_SIZE;

/// A subset of hand positions kept across the redraw.
///
/// Bit `i` set means the card at position `i` of the hand is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hold(u8);

impl Hold {
    /// Hold nothing.
    pub const NONE: Hold = Hold(0);

    /// Hold all five cards.
    pub const ALL: Hold = Hold((1 << HAND_SIZE) - 1);

    /// Create a hold from a position mask.
    pub fn from_mask(mask: u8) -> Self {
        debug_assert!(mask < 1 << HAND_SIZE, "hold mask must be 5 bits");
        Self(mask & Self::ALL.0)
    }

    /// Create a hold from hand positions.
    pub fn from_positions(positions: &[u8]) -> Self {
        Self::from_mask(positions.iter().fold(0u8, |m, &p| m | (1 << p)))
    }

    /// Create a hold from cards of `hand`.
    ///
    /// Every card must be in the hand, and none may repeat.
    pub fn from_cards(hand: &Hand, cards: &[Card]) -> Result<Self, HandError> {
        ensure_distinct(cards)?;
        let mut mask = 0u8;
        for &card in cards {
            let position = hand.position(card).ok_or(HandError::HoldNotInHand(card))?;
            mask |= 1 << position;
        }
        Ok(Self(mask))
    }

    /// The position mask.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.0
    }

    /// Number of cards held.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if nothing is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if a hand position is held.
    #[inline]
    pub fn holds(&self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    /// Number of replacement cards drawn.
    #[inline]
    pub fn draws(&self) -> usize {
        HAND_SIZE - self.len()
    }

    /// The held cards, in hand order.
    pub fn cards(&self, hand: &Hand) -> Vec<Card> {
        hand.cards()
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.holds(i))
            .map(|(_, &c)| c)
            .collect()
    }
}

impl fmt::Display for Hold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05b}", self.0)
    }
}

impl Serialize for Hold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Iterator over all 32 holds in canonical order.
///
/// Holds are grouped by size, smallest first, and within a size follow the
/// lexicographic order of hand positions.
#[derive(Debug, Clone)]
pub struct Holds {
    size: usize,
    inner: Combinations,
}

impl Holds {
    /// Start from the empty hold.
    pub fn new() -> Self {
        Self {
            size: 0,
            inner: Combinations::new(HAND_SIZE, 0),
        }
    }
}

impl Default for Holds {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Holds {
    type Item = Hold;

    fn next(&mut self) -> Option<Hold> {
        loop {
            if let Some(combo) = self.inner.next() {
                return Some(Hold::from_positions(combo.indices()));
            }
            if self.size == HAND_SIZE {
                return None;
            }
            self.size += 1;
            self.inner = Combinations::new(HAND_SIZE, self.size);
        }
    }
}
