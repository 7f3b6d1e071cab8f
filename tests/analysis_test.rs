//! End-to-end analysis against the full 52-card deck.

use draw_poker_ev::cards::{build_deck, Hand};
use draw_poker_ev::eval::{classify, HandCategory};
use draw_poker_ev::search::{
    analyze, binomial, expected_value, Analyzer, Hold, SearchConfig, NUM_HOLDS,
};

/// Draw counts and hold coverage for an ordinary hand.
#[test]
fn full_deck_analysis_shape() {
    let deck = build_deck();
    let hand = Hand::parse(&["HA", "D10", "CQ", "SK", "S2"], &deck).unwrap();
    let analysis = analyze(&deck, &hand).unwrap();

    assert_eq!(analysis.per_subset.len(), NUM_HOLDS);
    assert_eq!(analysis.initial.category, HandCategory::NoSpecialHand);
    assert_eq!(analysis.initial.score, 0);

    let none = analysis.get(Hold::NONE).unwrap();
    assert!(none.held.is_empty());
    assert_eq!(none.draws, 1_533_939);

    let all = analysis.get(Hold::ALL).unwrap();
    assert_eq!(all.draws, 1);
    assert_eq!(all.total, classify(hand.cards()).unwrap().score as u64);

    for ev in &analysis.per_subset {
        assert_eq!(ev.draws, binomial(47, 5 - ev.held.len()));
    }
    let draws: u64 = analysis.per_subset.iter().map(|ev| ev.draws).sum();
    assert_eq!(draws, binomial(52, 5));

    // The winner is at least as good as every other hold.
    for ev in &analysis.per_subset {
        assert!(analysis.best.best.cmp_mean(ev).is_ge());
    }
    assert_eq!(analysis.best.baseline, Some(0.0));
    assert!(analysis.best.improvement > 0.0);
}

#[test]
fn four_to_a_royal_draws_one() {
    let deck = build_deck();
    let hand = Hand::parse(&["S10", "SJ", "SQ", "SK", "H2"], &deck).unwrap();
    let analysis = analyze(&deck, &hand).unwrap();

    let best = &analysis.best.best;
    assert_eq!(best.held, hand.cards()[..4].to_vec());
    assert_eq!(best.draws, 47);
    // royal + straight flush + 7 flushes + 6 straights + 9 high pairs
    assert_eq!(best.total, 5000 + 1500 + 7 * 200 + 6 * 125 + 9 * 10);
    assert!(!analysis.best.keep_all());
}

#[test]
fn made_royal_is_kept() {
    let deck = build_deck();
    let hand = Hand::parse(&["HA", "HK", "HQ", "HJ", "H10"], &deck).unwrap();
    let analysis = analyze(&deck, &hand).unwrap();

    assert_eq!(analysis.initial.category, HandCategory::RoyalFlush);
    assert_eq!(analysis.best.best.hold, Hold::ALL);
    assert!(analysis.best.keep_all());
    assert_eq!(analysis.best.improvement, 0.0);
    assert_eq!(analysis.best.best.mean(), 5000.0);
}

/// Parallel and sequential runs return identical results, including the
/// selected hold, and repeated runs agree.
#[test]
fn parallel_and_sequential_agree() {
    let deck = build_deck();
    let hand = Hand::parse(&["HJ", "DJ", "C5", "S5", "H9"], &deck).unwrap();

    let parallel = Analyzer::new(SearchConfig::default()).run(&deck, &hand).unwrap();
    let sequential = Analyzer::new(SearchConfig::sequential()).run(&deck, &hand).unwrap();
    let again = Analyzer::new(SearchConfig::default().with_threads(2))
        .run(&deck, &hand)
        .unwrap();

    assert_eq!(parallel.per_subset, sequential.per_subset);
    assert_eq!(parallel.best, sequential.best);
    assert_eq!(parallel.best, again.best);
}

#[test]
fn single_hold_matches_analysis() {
    let deck = build_deck();
    let hand = Hand::parse(&["HJ", "DJ", "C5", "S5", "H9"], &deck).unwrap();
    let held = [hand.cards()[0], hand.cards()[1]];

    let ev = expected_value(&deck, &hand, &held).unwrap();
    let analysis = Analyzer::new(SearchConfig::sequential()).run(&deck, &hand).unwrap();
    let hold = Hold::from_cards(&hand, &held).unwrap();
    assert_eq!(analysis.get(hold), Some(&ev));
    assert_eq!(ev.draws, binomial(47, 3));
}
