//! The deck a hand is dealt from and redrawn against.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::{Card, Rank, Suit};
use super::hand::HandError;

/// A set of unique playing cards in a fixed iteration order.
///
/// The standard deck lists suits Hearts, Diamonds, Clubs, Spades and within
/// each suit Ace, 2..10, Jack, Queen, King. Order only matters for
/// reproducible enumeration.
#[derive(Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    /// Bitmask of member cards (for fast checking).
    mask: u64,
}

/// Build the standard 52-card deck.
pub fn build_deck() -> Deck {
    Deck::standard()
}

impl Deck {
    /// Create the standard 52-card deck.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        let mut mask = 0u64;
        for suit in Suit::ALL {
            for rank in Rank::DECK_ORDER {
                let card = Card::new(rank, suit);
                mask |= card.mask();
                cards.push(card);
            }
        }
        Self { cards, mask }
    }

    /// Create a deck from explicit cards, keeping their order.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut mask = 0u64;
        for &card in &cards {
            if mask & card.mask() != 0 {
                return Err(HandError::DuplicateInDeck(card));
            }
            mask |= card.mask();
        }
        Ok(Self { cards, mask })
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in iteration order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check if a card belongs to the deck.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.mask & card.mask() != 0
    }

    /// Bitmask of member cards.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Cards of the deck not present in `dead`, in deck order.
    pub fn without(&self, dead: &[Card]) -> Vec<Card> {
        let dead_mask = dead.iter().fold(0u64, |m, c| m | c.mask());
        self.cards
            .iter()
            .copied()
            .filter(|c| dead_mask & c.mask() == 0)
            .collect()
    }

    /// Draw `n` distinct cards uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Card> {
        self.cards.choose_multiple(rng, n).copied().collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} cards)", self.len())
    }
}
