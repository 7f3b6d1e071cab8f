//! # Draw Poker EV
//!
//! Exact expected-value analysis for five-card draw poker with a fixed pay
//! table. For a dealt hand, every one of the 32 ways to hold cards is scored
//! by enumerating all replacement draws from the rest of the deck, and the
//! hold with the highest expected score is recommended.
//!
//! ## Features
//!
//! - **Exact Search**: Every draw is enumerated; nothing is sampled
//! - **Fast Classifier**: Allocation-free five-card categorization
//! - **Parallel**: Holds and draw batches run on rayon, with identical results
//! - **Deterministic**: Integer score sums and exact rational comparison
//! - **Reports**: Strategy table, outcome odds and JSON export
//!
//! ## Quick Start
//!
//! ```no_run
//! use draw_poker_ev::cards::{build_deck, Hand};
//! use draw_poker_ev::search::analyze;
//!
//! let deck = build_deck();
//! let hand = Hand::parse(&["HA", "D10", "CQ", "SK", "S2"], &deck).unwrap();
//! let analysis = analyze(&deck, &hand).unwrap();
//! println!("hold {:?} for {:.2}", analysis.best.best.held, analysis.best.best.mean());
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, the deck and validated hands
//! - [`eval`]: Hand categories, pay table and the classifier
//! - [`search`]: Expected-value search and best-hold selection
//! - [`report`]: Tables and JSON export
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐    ┌────────────┐    ┌──────────────────┐    ┌──────────┐
//! │   Cards   │───▶│ Classifier │───▶│ Expected-Value   │───▶│ Selector │
//! │ deck/hand │    │  (eval)    │    │ Search (32 holds)│    │ best hold│
//! └───────────┘    └────────────┘    └──────────────────┘    └──────────┘
//! ```

#![warn(missing_docs)]

/// Card model module.
pub mod cards;

/// Hand evaluation module.
pub mod eval;

/// Expected-value search module.
pub mod search;

/// Report output module.
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use cards::{build_deck, Card, Deck, Hand, HandError};
pub use eval::{classify, Classification, HandCategory};
pub use report::AnalysisReport;
pub use search::{analyze, Analysis, AnalysisError, Analyzer, SearchConfig};
