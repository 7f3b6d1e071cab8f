//! Exact expected score of a hold.
//!
//! For a hold of `h` cards the search enumerates every `(5 - h)`-card draw
//! from the cards left after removing the hand from the deck, classifies each
//! resulting hand and sums the scores. Draws are split into batches by their
//! first card; batch sums are integers, so the total does not depend on the
//! order batches finish in.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

use crate::cards::{Card, Deck, Hand, HandError, HAND_SIZE};
use crate::eval::{evaluate, HandCategory};

use super::combinations::{binomial, Combinations};
use super::hold::Hold;

/// Exact expected score of one hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedValue {
    /// The hold, as a mask of hand positions.
    pub hold: Hold,
    /// The held cards, in hand order.
    pub held: Vec<Card>,
    /// Sum of scores over every enumerated draw.
    pub total: u64,
    /// Number of enumerated draws.
    pub draws: u64,
}

impl ExpectedValue {
    /// Mean score as a float, or 0.0 when there are no draws.
    pub fn mean(&self) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        self.total as f64 / self.draws as f64
    }

    /// Mean score rounded to `precision` decimal digits.
    pub fn rounded(&self, precision: u32) -> f64 {
        let scale = 10f64.powi(precision as i32);
        (self.mean() * scale).round() / scale
    }

    /// Whether at least one draw was enumerated, so the mean is defined.
    pub fn has_draws(&self) -> bool {
        self.draws > 0
    }

    /// Compare exact means (`total / draws`) by cross-multiplication.
    ///
    /// A result with no draws has no mean and ranks below every result that
    /// has one.
    pub fn cmp_mean(&self, other: &Self) -> Ordering {
        match (self.has_draws(), other.has_draws()) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {}
        }
        let lhs = self.total as u128 * other.draws as u128;
        let rhs = other.total as u128 * self.draws as u128;
        lhs.cmp(&rhs)
    }
}

/// Expected score of holding `held` from `hand` and redrawing the rest.
///
/// `hand` must be drawn from `deck` and `held` must be distinct cards of
/// `hand`. Cards in the hand are never redrawn.
pub fn expected_value(deck: &Deck, hand: &Hand, held: &[Card]) -> Result<ExpectedValue, HandError> {
    check_hand_in_deck(deck, hand)?;
    let hold = Hold::from_cards(hand, held)?;
    let remaining = deck.without(hand.cards());
    Ok(evaluate_hold(&remaining, hand, hold, false))
}

pub(crate) fn check_hand_in_deck(deck: &Deck, hand: &Hand) -> Result<(), HandError> {
    match hand.cards().iter().find(|&&c| !deck.contains(c)) {
        Some(&card) => Err(HandError::NotInDeck(card)),
        None => Ok(()),
    }
}

/// Enumerate every draw for `hold` against `remaining`.
pub(crate) fn evaluate_hold(
    remaining: &[Card],
    hand: &Hand,
    hold: Hold,
    parallel: bool,
) -> ExpectedValue {
    let held = hold.cards(hand);
    let mut base = [hand.cards()[0]; HAND_SIZE];
    base[..held.len()].copy_from_slice(&held);

    let n = remaining.len();
    let k = hold.draws();

    let (total, draws) = if k == 0 {
        (evaluate(&base).score() as u64, 1)
    } else {
        let batch = |first: usize| sum_batch(remaining, base, held.len(), first, k);
        if parallel {
            (0..n)
                .into_par_iter()
                .map(batch)
                .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
        } else {
            (0..n).map(batch).fold((0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
        }
    };
    debug_assert_eq!(draws, binomial(n, k), "every draw is enumerated exactly once");

    ExpectedValue {
        hold,
        held,
        total,
        draws,
    }
}

/// Sum scores over all draws whose lowest-index card is `remaining[first]`.
fn sum_batch(
    remaining: &[Card],
    cards: [Card; HAND_SIZE],
    held: usize,
    first: usize,
    k: usize,
) -> (u64, u64) {
    let mut total = 0u64;
    let mut draws = 0u64;
    for_each_draw(remaining, cards, held, first, k, |category| {
        total += category.score() as u64;
        draws += 1;
    });
    (total, draws)
}

/// Classify every hand formed by the held cards plus a draw starting at
/// `remaining[first]`.
#[inline]
fn for_each_draw<F: FnMut(HandCategory)>(
    remaining: &[Card],
    mut cards: [Card; HAND_SIZE],
    held: usize,
    first: usize,
    k: usize,
    mut f: F,
) {
    cards[held] = remaining[first];
    let rest = &remaining[first + 1..];
    for combo in Combinations::new(rest.len(), k - 1) {
        for (slot, &i) in cards[held + 1..].iter_mut().zip(combo.indices()) {
            *slot = rest[i as usize];
        }
        f(evaluate(&cards));
    }
}

/// How often each category comes up when holding `held` and redrawing.
///
/// Counts sum to the hold's draw count; categories that cannot occur are
/// absent.
pub fn outcome_counts(
    deck: &Deck,
    hand: &Hand,
    held: &[Card],
) -> Result<FxHashMap<HandCategory, u64>, HandError> {
    check_hand_in_deck(deck, hand)?;
    let hold = Hold::from_cards(hand, held)?;
    let remaining = deck.without(hand.cards());

    let mut base = [hand.cards()[0]; HAND_SIZE];
    base[..held.len()].copy_from_slice(&hold.cards(hand));

    let mut counts = FxHashMap::default();
    let k = hold.draws();
    if k == 0 {
        counts.insert(evaluate(&base), 1);
        return Ok(counts);
    }
    for first in 0..remaining.len() {
        for_each_draw(&remaining, base, held.len(), first, k, |category| {
            *counts.entry(category).or_insert(0) += 1;
        });
    }
    Ok(counts)
}
