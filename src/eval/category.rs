//! Hand categories and the fixed pay table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hand categories, ordered from best to worst.
///
/// The order of the variants is the evaluation precedence: a hand that
/// matches several patterns takes the first one in this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// 10-J-Q-K-A of one suit.
    RoyalFlush,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// A single pair of jacks, queens, kings or aces.
    JacksOrBetter,
    /// Anything else.
    NoSpecialHand,
}

impl HandCategory {
    /// All categories in precedence order.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::JacksOrBetter,
        HandCategory::NoSpecialHand,
    ];

    /// Score paid for this category.
    pub const fn score(&self) -> u32 {
        match self {
            HandCategory::RoyalFlush => 5000,
            HandCategory::StraightFlush => 1500,
            HandCategory::FourOfAKind => 600,
            HandCategory::FullHouse => 300,
            HandCategory::Flush => 200,
            HandCategory::Straight => 125,
            HandCategory::ThreeOfAKind => 75,
            HandCategory::TwoPair => 40,
            HandCategory::JacksOrBetter => 10,
            HandCategory::NoSpecialHand => 0,
        }
    }

    /// Get the category name.
    pub const fn name(&self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::JacksOrBetter => "Jacks or Better",
            HandCategory::NoSpecialHand => "No Special Hand",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A category together with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// The matched category.
    pub category: HandCategory,
    /// Score from the pay table.
    pub score: u32,
}

impl From<HandCategory> for Classification {
    fn from(category: HandCategory) -> Self {
        Self {
            category,
            score: category.score(),
        }
    }
}
