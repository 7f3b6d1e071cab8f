//! Exhaustive expected-value search over holds.
//!
//! For a five-card hand there are 2^5 = 32 ways to choose which cards to
//! keep. For each hold the search enumerates every combination of
//! replacement cards from the rest of the deck, classifies the resulting
//! hand and averages the scores exactly. Nothing is sampled.
//!
//! # Cost
//!
//! Holding nothing against a 52-card deck means C(47, 5) = 1,533,939 draws.
//! Summed over all 32 holds the search classifies C(52, 5) = 2,598,960
//! hands, which is why the classifier never allocates.
//!
//! # Determinism
//!
//! Scores are summed as integers and means are compared as exact rationals,
//! so parallel and sequential runs agree bit-for-bit and the selected hold
//! never depends on floating-point rounding. Rounding applies to display
//! only (see [`SearchConfig::precision`]).

pub mod analysis;
pub mod combinations;
pub mod config;
pub mod expected;
pub mod hold;
pub mod selector;

pub use analysis::{analyze, Analysis, AnalysisError, Analyzer, CancelToken};
pub use combinations::{binomial, Combinations, Combo};
pub use config::{ConfigError, SearchConfig};
pub use expected::{expected_value, outcome_counts, ExpectedValue};
pub use hold::{Hold, Holds, NUM_HOLDS};
pub use selector::{select_best, Recommendation};
