//! A validated five-card hand.

use rand::Rng;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::card::{Card, CardError};
use super::deck::Deck;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Precondition violations on hands, holds and decks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A token failed to parse.
    #[error(transparent)]
    Card(#[from] CardError),

    /// The hand does not contain exactly five cards.
    #[error("expected {expected} cards, got {actual}")]
    WrongHandSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },

    /// The same card appears twice in a hand or hold.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),

    /// A hand card is not a member of the supplied deck.
    #[error("card {0} is not in the deck")]
    NotInDeck(Card),

    /// A held card is not part of the hand.
    #[error("held card {0} is not in the hand")]
    HoldNotInHand(Card),

    /// The same card appears twice in a deck.
    #[error("duplicate card in deck: {0}")]
    DuplicateInDeck(Card),
}

/// An ordered sequence of five distinct cards drawn from a deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand, checking size, distinctness and deck membership.
    pub fn new(cards: &[Card], deck: &Deck) -> Result<Self, HandError> {
        let cards = five_distinct(cards)?;
        if let Some(&card) = cards.iter().find(|&&c| !deck.contains(c)) {
            return Err(HandError::NotInDeck(card));
        }
        Ok(Self { cards })
    }

    /// Parse a hand from tokens like `["HA", "D10", "CQ", "SK", "S2"]`.
    pub fn parse<S: AsRef<str>>(tokens: &[S], deck: &Deck) -> Result<Self, HandError> {
        let cards = super::card::parse_cards(tokens)?;
        Self::new(&cards, deck)
    }

    /// Deal a random hand from the deck.
    pub fn random<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Result<Self, HandError> {
        Self::new(&deck.sample(rng, HAND_SIZE), deck)
    }

    /// The cards in dealt order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Position of a card in the hand.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Bitmask of the hand's cards.
    pub fn mask(&self) -> u64 {
        self.cards.iter().fold(0u64, |m, c| m | c.mask())
    }
}

/// Check that `cards` holds exactly five distinct cards.
pub(crate) fn five_distinct(cards: &[Card]) -> Result<[Card; HAND_SIZE], HandError> {
    let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| HandError::WrongHandSize {
        expected: HAND_SIZE,
        actual: cards.len(),
    })?;
    ensure_distinct(&cards)?;
    Ok(cards)
}

pub(crate) fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = 0u64;
    for &card in cards {
        if seen & card.mask() != 0 {
            return Err(HandError::DuplicateCard(card));
        }
        seen |= card.mask();
    }
    Ok(())
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.cards.iter().map(Card::symbol).collect();
        write!(f, "{}", symbols.join(" "))
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_hand() {
        let deck = Deck::standard();
        let hand = Hand::parse(&["HA", "D10", "CQ", "SK", "S2"], &deck).unwrap();
        assert_eq!(hand.cards()[1].to_string(), "D10");
        assert_eq!(hand.to_string(), "♥A ♦10 ♣Q ♠K ♠2");
        assert_eq!(hand.mask().count_ones(), 5);
    }

    #[test]
    fn test_wrong_size() {
        let deck = Deck::standard();
        assert_eq!(
            Hand::parse(&["HA", "D10", "CQ", "SK"], &deck),
            Err(HandError::WrongHandSize { expected: 5, actual: 4 })
        );
        assert_eq!(
            Hand::parse(&["HA", "D10", "CQ", "SK", "S2", "S3"], &deck),
            Err(HandError::WrongHandSize { expected: 5, actual: 6 })
        );
    }

    #[test]
    fn test_duplicate_card() {
        let deck = Deck::standard();
        let result = Hand::parse(&["HA", "D10", "ha", "SK", "S2"], &deck);
        assert_eq!(result, Err(HandError::DuplicateCard("HA".parse().unwrap())));
    }

    #[test]
    fn test_invalid_token() {
        let deck = Deck::standard();
        let result = Hand::parse(&["HA", "D10", "X5", "SK", "S2"], &deck);
        assert!(matches!(result, Err(HandError::Card(CardError::InvalidCard(t))) if t == "X5"));
    }

    #[test]
    fn test_not_in_deck() {
        let sa: Card = "SA".parse().unwrap();
        let deck = Deck::from_cards(Deck::standard().without(&[sa])).unwrap();
        let result = Hand::parse(&["SA", "D10", "CQ", "SK", "S2"], &deck);
        assert_eq!(result, Err(HandError::NotInDeck(sa)));
    }

    #[test]
    fn test_random_hand() {
        let deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let a = Hand::random(&deck, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let b = Hand::random(&deck, &mut rng).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mask().count_ones(), 5);
    }
}
