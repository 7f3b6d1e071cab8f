//! Hand evaluation.
//!
//! Maps five cards to one of ten mutually exclusive categories under a fixed
//! precedence order, and each category to its score in the pay table.
//!
//! | Category        | Score |
//! |-----------------|------:|
//! | Royal Flush     | 5000  |
//! | Straight Flush  | 1500  |
//! | Four of a Kind  | 600   |
//! | Full House      | 300   |
//! | Flush           | 200   |
//! | Straight        | 125   |
//! | Three of a Kind | 75    |
//! | Two Pair        | 40    |
//! | Jacks or Better | 10    |
//! | No Special Hand | 0     |

pub mod category;
pub mod classifier;

pub use category::{Classification, HandCategory};
pub use classifier::{classify, classify_hand, evaluate};
