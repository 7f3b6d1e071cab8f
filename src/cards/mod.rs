//! Card model: cards, the deck and validated hands.
//!
//! Cards are compact `Copy` values (`rank * 4 + suit`) so that a set of cards
//! fits in a `u64` bitmask. The deck and hand types enforce the uniqueness
//! and membership preconditions that the evaluator and search rely on.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{parse_cards, Card, CardError, Rank, Suit};
pub use deck::{build_deck, Deck};
pub use hand::{Hand, HandError, HAND_SIZE};
