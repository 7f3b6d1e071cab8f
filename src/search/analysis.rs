//! Whole-hand analysis: every hold, then the best one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::cards::{Card, Deck, Hand, HandError};
use crate::eval::{classify_hand, Classification};

use super::config::{ConfigError, SearchConfig};
use super::expected::{check_hand_in_deck, evaluate_hold, ExpectedValue};
use super::hold::{Hold, Holds, NUM_HOLDS};
use super::selector::{select_best, Recommendation};

/// Errors returned by an analysis. No partial results accompany them.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The hand, hold or deck violates a precondition.
    #[error(transparent)]
    Hand(#[from] HandError),

    /// The search configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The cancellation token was set before the search finished.
    #[error("analysis cancelled")]
    Cancelled,

    /// The worker pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// No hold was evaluated.
    #[error("no holds evaluated")]
    NoResults,
}

/// Shared flag for cancelling a running analysis.
///
/// Checked before each hold is evaluated; a hold already in progress runs
/// to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of analyzing a hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The analyzed hand.
    pub hand: Hand,
    /// Category and score of the hand as dealt.
    pub initial: Classification,
    /// Expected value of every hold, in enumeration order.
    pub per_subset: Vec<ExpectedValue>,
    /// The selected hold.
    pub best: Recommendation,
}

impl Analysis {
    /// Look up the result for a hold.
    pub fn get(&self, hold: Hold) -> Option<&ExpectedValue> {
        self.per_subset.iter().find(|r| r.hold == hold)
    }
}

type ProgressFn<'a> = Box<dyn Fn(&ExpectedValue) + Send + Sync + 'a>;

/// Runs the expected-value search over all holds of a hand.
///
/// # Example
/// ```no_run
/// use draw_poker_ev::cards::{build_deck, Hand};
/// use draw_poker_ev::search::{Analyzer, SearchConfig};
///
/// let deck = build_deck();
/// let hand = Hand::parse(&["HA", "D10", "CQ", "SK", "S2"], &deck).unwrap();
/// let analysis = Analyzer::new(SearchConfig::default()).run(&deck, &hand).unwrap();
/// println!("hold {:?}", analysis.best.best.held);
/// ```
pub struct Analyzer<'a> {
    config: SearchConfig,
    cancel: Option<CancelToken>,
    progress: Option<ProgressFn<'a>>,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: None,
            progress: None,
        }
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Call `f` after each hold is evaluated.
    ///
    /// With parallel search the calls arrive in completion order.
    pub fn with_progress<F>(mut self, f: F) -> Self
    where
        F: Fn(&ExpectedValue) + Send + Sync + 'a,
    {
        self.progress = Some(Box::new(f));
        self
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Evaluate every hold of `hand` against `deck` and pick the best.
    pub fn run(&self, deck: &Deck, hand: &Hand) -> Result<Analysis, AnalysisError> {
        self.config.validate()?;
        check_hand_in_deck(deck, hand)?;

        let start = Instant::now();
        let remaining = deck.without(hand.cards());
        let holds: Vec<Hold> = Holds::new().collect();
        debug_assert_eq!(holds.len(), NUM_HOLDS);

        let per_subset = if self.config.parallel {
            let search = || {
                holds
                    .par_iter()
                    .map(|&hold| self.evaluate(&remaining, hand, hold))
                    .collect::<Result<Vec<_>, _>>()
            };
            match self.config.num_threads {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| AnalysisError::ThreadPool(e.to_string()))?
                    .install(search)?,
                None => search()?,
            }
        } else {
            holds
                .iter()
                .map(|&hold| self.evaluate(&remaining, hand, hold))
                .collect::<Result<Vec<_>, _>>()?
        };

        let best = select_best(&per_subset).ok_or(AnalysisError::NoResults)?;
        log::info!(
            "analyzed {} holds of [{}] in {:.2}s, best {:?} at {:.prec$}",
            per_subset.len(),
            hand,
            start.elapsed().as_secs_f64(),
            best.best.held,
            best.best.mean(),
            prec = self.config.precision as usize,
        );

        Ok(Analysis {
            hand: *hand,
            initial: classify_hand(hand),
            per_subset,
            best,
        })
    }

    fn evaluate(
        &self,
        remaining: &[Card],
        hand: &Hand,
        hold: Hold,
    ) -> Result<ExpectedValue, AnalysisError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(AnalysisError::Cancelled);
        }
        let result = evaluate_hold(remaining, hand, hold, self.config.parallel);
        log::debug!(
            "hold {} {:?}: {} / {} draws",
            hold,
            result.held,
            result.total,
            result.draws
        );
        if let Some(progress) = &self.progress {
            progress(&result);
        }
        Ok(result)
    }
}

/// Analyze a hand with the default configuration.
pub fn analyze(deck: &Deck, hand: &Hand) -> Result<Analysis, AnalysisError> {
    Analyzer::new(SearchConfig::default()).run(deck, hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandCategory;
    use std::sync::atomic::AtomicUsize;

    /// A reduced deck keeps these tests fast; 20 cards leave 15 to draw from.
    fn small_deck() -> Deck {
        let tokens = [
            "HA", "HK", "HQ", "HJ", "H10", "DA", "DK", "DQ", "DJ", "D10", "CA", "CK", "CQ", "CJ",
            "C10", "SA", "SK", "SQ", "SJ", "S10",
        ];
        let cards: Vec<Card> = tokens.iter().map(|t| t.parse().unwrap()).collect();
        Deck::from_cards(cards).unwrap()
    }

    #[test]
    fn test_all_holds_evaluated() {
        let deck = small_deck();
        let hand = Hand::parse(&["HA", "HK", "DQ", "CJ", "S10"], &deck).unwrap();
        let analysis = Analyzer::new(SearchConfig::sequential()).run(&deck, &hand).unwrap();

        assert_eq!(analysis.per_subset.len(), NUM_HOLDS);
        assert_eq!(analysis.initial.category, HandCategory::Straight);
        let keep = analysis.get(Hold::ALL).unwrap();
        assert_eq!(keep.draws, 1);
        assert_eq!(keep.total, 125);
        let none = analysis.get(Hold::NONE).unwrap();
        assert_eq!(none.draws, 3003); // C(15, 5)
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let deck = small_deck();
        let hand = Hand::parse(&["HA", "DA", "CK", "SQ", "HJ"], &deck).unwrap();
        let seq = Analyzer::new(SearchConfig::sequential()).run(&deck, &hand).unwrap();
        let par = Analyzer::new(SearchConfig::default()).run(&deck, &hand).unwrap();
        let pooled = Analyzer::new(SearchConfig::default().with_threads(2))
            .run(&deck, &hand)
            .unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq, pooled);
    }

    #[test]
    fn test_cancelled() {
        let deck = small_deck();
        let hand = Hand::parse(&["HA", "DA", "CK", "SQ", "HJ"], &deck).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let result = Analyzer::new(SearchConfig::default())
            .with_cancel(token)
            .run(&deck, &hand);
        assert!(matches!(result, Err(AnalysisError::Cancelled)));
    }

    #[test]
    fn test_progress_called_per_hold() {
        let deck = small_deck();
        let hand = Hand::parse(&["HA", "DA", "CK", "SQ", "HJ"], &deck).unwrap();
        let calls = AtomicUsize::new(0);
        Analyzer::new(SearchConfig::default())
            .with_progress(|_| {
                calls.fetch_add(1, Ordering::Relaxed);
            })
            .run(&deck, &hand)
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), NUM_HOLDS);
    }

    #[test]
    fn test_short_deck_skips_impossible_holds() {
        let tokens = ["HA", "DA", "CA", "SA", "HK", "D2", "C3", "S4"];
        let cards: Vec<Card> = tokens.iter().map(|t| t.parse().unwrap()).collect();
        let deck = Deck::from_cards(cards).unwrap();
        let hand = Hand::parse(&tokens[..5], &deck).unwrap();

        for config in [SearchConfig::sequential(), SearchConfig::default()] {
            let analysis = Analyzer::new(config).run(&deck, &hand).unwrap();
            assert_eq!(analysis.get(Hold::NONE).unwrap().draws, 0);

            let best = &analysis.best;
            assert_ne!(best.best.hold, Hold::NONE);
            assert_eq!(best.best.hold, Hold::from_positions(&[0, 1, 2, 3]));
            assert_eq!(best.best.mean(), 600.0);
            assert_eq!(best.baseline, Some(600.0));
            assert_eq!(best.improvement, 0.0);
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        let deck = small_deck();
        let hand = Hand::parse(&["HA", "DA", "CK", "SQ", "HJ"], &Deck::standard()).unwrap();
        let other = Hand::parse(&["H2", "DA", "CK", "SQ", "HJ"], &Deck::standard()).unwrap();
        assert!(matches!(
            Analyzer::new(SearchConfig::default()).run(&deck, &other),
            Err(AnalysisError::Hand(HandError::NotInDeck(_)))
        ));
        assert!(matches!(
            Analyzer::new(SearchConfig::default().with_threads(0)).run(&deck, &hand),
            Err(AnalysisError::Config(ConfigError::InvalidThreads(0)))
        ));
    }
}
