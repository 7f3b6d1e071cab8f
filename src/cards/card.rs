//! Card representation.
//!
//! This module provides the fundamental card types:
//! - `Suit`: one of the four suits, with a letter and a display symbol
//! - `Rank`: Two through Ace, ordered with Ace highest
//! - `Card`: a single playing card with rank and suit

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing card tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token does not name any card (bad suit, bad rank or bad length).
    #[error("invalid card: {0}")]
    InvalidCard(String),
}

/// Suit of a card.
///
/// Discriminants follow the standard deck order (Hearts, Diamonds, Clubs, Spades).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// ♥
    Hearts = 0,
    /// ♦
    Diamonds = 1,
    /// ♣
    Clubs = 2,
    /// ♠
    Spades = 3,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Get the suit from its index (0-3).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 4, "suit must be 0-3");
        Self::ALL[index as usize & 3]
    }

    /// Single-letter token used at the input boundary.
    pub fn letter(&self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Unicode symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Rank of a card, ordered 2 < 3 < ... < K < A.
///
/// The discriminant doubles as the bit position in a rank mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks in the order a fresh deck lists them (Ace first).
    pub const DECK_ORDER: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Get the rank from its index (0-12).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 13, "rank must be 0-12");
        Self::ALL[index as usize]
    }

    /// Token used at the input boundary ("A", "2".."10", "J", "Q", "K").
    pub fn token(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_token(s: &str) -> Option<Self> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: rank as u8 * 4 + suit as u8,
        }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.id / 4)
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::from_index(self.id % 4)
    }

    /// Bit for this card in a 64-bit card set.
    #[inline]
    pub fn mask(&self) -> u64 {
        1u64 << self.id
    }

    /// Display form with the suit symbol, e.g. "♥A", "♠10".
    pub fn symbol(&self) -> String {
        format!("{}{}", self.suit().symbol(), self.rank().token())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse a token like "HA", "d10", "ST", "cq".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());
        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_letter).ok_or_else(invalid)?;
        let rank = Rank::from_token(chars.as_str()).ok_or_else(invalid)?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit().letter(), self.rank().token())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a list of card tokens.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
