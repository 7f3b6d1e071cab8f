//! Best-hold selection.
//!
//! Tie-break policy: the first hold in enumeration order with the strictly
//! greatest exact mean wins. Ties are common (for example, two holds that
//! both leave a hand with no way to score) and the policy is arbitrary; it
//! favors smaller holds since those are enumerated first.

use serde::Serialize;
use std::cmp::Ordering;

use super::expected::ExpectedValue;
use super::hold::Hold;

/// The recommended hold and how it compares with keeping every card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// The best hold and its exact expected score.
    pub best: ExpectedValue,
    /// Mean score of holding all five cards, if that hold was evaluated.
    pub baseline: Option<f64>,
    /// Best mean minus baseline mean; 0.0 without a baseline.
    pub improvement: f64,
}

impl Recommendation {
    /// Whether the best play is to keep the whole hand.
    pub fn keep_all(&self) -> bool {
        self.best.hold == Hold::ALL || (self.baseline.is_some() && self.improvement <= 0.0)
    }
}

/// Select the hold with the greatest expected score.
///
/// `results` must be in enumeration order for the tie-break to be
/// meaningful. Holds with no possible draws are skipped. Returns `None` when
/// no hold has a defined mean.
pub fn select_best(results: &[ExpectedValue]) -> Option<Recommendation> {
    let mut iter = results.iter().filter(|r| r.has_draws());
    let mut best = iter.next()?;
    for candidate in iter {
        if candidate.cmp_mean(best) == Ordering::Greater {
            best = candidate;
        }
    }

    let baseline = results
        .iter()
        .find(|r| r.hold == Hold::ALL && r.has_draws())
        .map(ExpectedValue::mean);
    let improvement = baseline.map_or(0.0, |b| best.mean() - b);

    Some(Recommendation {
        best: best.clone(),
        baseline,
        improvement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(mask: u8, total: u64, draws: u64) -> ExpectedValue {
        ExpectedValue {
            hold: Hold::from_mask(mask),
            held: Vec::new(),
            total,
            draws,
        }
    }

    #[test]
    fn test_picks_greatest_mean() {
        let results = vec![ev(0b00000, 10, 10), ev(0b00001, 30, 10), ev(0b11111, 2, 1)];
        let rec = select_best(&results).unwrap();
        assert_eq!(rec.best.hold, Hold::from_mask(0b00001));
        assert_eq!(rec.baseline, Some(2.0));
        assert_eq!(rec.improvement, 1.0);
        assert!(!rec.keep_all());
    }

    #[test]
    fn test_ties_go_to_first_enumerated() {
        // 1/3 and 2/6 are the same exact mean.
        let results = vec![ev(0b00010, 1, 3), ev(0b00100, 2, 6), ev(0b11111, 0, 1)];
        for _ in 0..10 {
            let rec = select_best(&results).unwrap();
            assert_eq!(rec.best.hold, Hold::from_mask(0b00010));
        }
    }

    #[test]
    fn test_keep_all() {
        let results = vec![ev(0b00000, 5, 10), ev(0b11111, 40, 1)];
        let rec = select_best(&results).unwrap();
        assert_eq!(rec.best.hold, Hold::ALL);
        assert_eq!(rec.improvement, 0.0);
        assert!(rec.keep_all());
    }

    #[test]
    fn test_empty() {
        assert!(select_best(&[]).is_none());
        assert!(select_best(&[ev(0b00000, 0, 0)]).is_none());
    }

    #[test]
    fn test_skips_holds_without_draws() {
        let results = vec![ev(0b00000, 0, 0), ev(0b01111, 1800, 3), ev(0b11111, 600, 1)];
        let rec = select_best(&results).unwrap();
        assert_eq!(rec.best.hold, Hold::from_mask(0b01111));
        assert_eq!(rec.baseline, Some(600.0));
        assert_eq!(rec.improvement, 0.0);
        assert!(rec.keep_all());
    }

    #[test]
    fn test_no_baseline() {
        let results = vec![ev(0b00000, 10, 10), ev(0b00011, 30, 10)];
        let rec = select_best(&results).unwrap();
        assert_eq!(rec.best.hold, Hold::from_mask(0b00011));
        assert_eq!(rec.baseline, None);
        assert_eq!(rec.improvement, 0.0);
        assert!(!rec.keep_all());
    }
}
