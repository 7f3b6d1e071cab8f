//! Exhaustive checks of the classifier over every five-card hand.

use draw_poker_ev::cards::{build_deck, Card};
use draw_poker_ev::eval::{classify, evaluate, HandCategory};
use draw_poker_ev::search::{binomial, Combinations};
use rustc_hash::FxHashMap;

fn hand_at(cards: &[Card], indices: &[u8]) -> [Card; 5] {
    [
        cards[indices[0] as usize],
        cards[indices[1] as usize],
        cards[indices[2] as usize],
        cards[indices[3] as usize],
        cards[indices[4] as usize],
    ]
}

/// Category frequencies over all C(52, 5) hands.
#[test]
fn category_frequencies_over_whole_deck() {
    let deck = build_deck();
    let cards = deck.cards();

    let mut counts: FxHashMap<HandCategory, u64> = FxHashMap::default();
    for combo in Combinations::new(cards.len(), 5) {
        let hand = hand_at(cards, combo.indices());
        *counts.entry(evaluate(&hand)).or_insert(0) += 1;
    }

    let expected = [
        (HandCategory::RoyalFlush, 4),
        (HandCategory::StraightFlush, 36),
        (HandCategory::FourOfAKind, 624),
        (HandCategory::FullHouse, 3_744),
        (HandCategory::Flush, 5_108),
        (HandCategory::Straight, 10_200),
        (HandCategory::ThreeOfAKind, 54_912),
        (HandCategory::TwoPair, 123_552),
        (HandCategory::JacksOrBetter, 337_920),
        (HandCategory::NoSpecialHand, 2_062_860),
    ];
    for (category, count) in expected {
        assert_eq!(counts.get(&category).copied(), Some(count), "{}", category);
    }
    assert_eq!(counts.values().sum::<u64>(), binomial(52, 5));
}

/// The checked entry point agrees with the unchecked one and is stable.
#[test]
fn classify_agrees_with_evaluate() {
    let deck = build_deck();
    let cards = deck.cards();

    for combo in Combinations::new(cards.len(), 5).step_by(997) {
        let hand = hand_at(cards, combo.indices());
        let first = classify(&hand).unwrap();
        let second = classify(&hand).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.category, evaluate(&hand));
        assert_eq!(first.score, first.category.score());
    }
}

#[test]
fn named_hands() {
    let cases: [(&[&str], HandCategory, u32); 4] = [
        (&["HA", "D10", "CQ", "SK", "S2"], HandCategory::NoSpecialHand, 0),
        (&["HA", "H2", "H3", "H4", "H5"], HandCategory::StraightFlush, 1500),
        (&["HJ", "DJ", "C5", "S5", "H9"], HandCategory::TwoPair, 40),
        (&["S10", "SJ", "SQ", "SK", "SA"], HandCategory::RoyalFlush, 5000),
    ];
    for (tokens, category, score) in cases {
        let cards = draw_poker_ev::cards::parse_cards(tokens).unwrap();
        let result = classify(&cards).unwrap();
        assert_eq!(result.category, category, "{:?}", tokens);
        assert_eq!(result.score, score);
    }
}
