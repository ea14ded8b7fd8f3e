//! Runs: contiguous groups of cards moved as a unit.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::card::{Card, CardKey};

/// A run of cards, head first.
///
/// Thirteen inline slots cover the longest legal tableau sequence.
pub type Run = SmallVec<[Card; 13]>;

/// Identity keys of every card in a run.
#[must_use]
pub fn run_keys(run: &[Card]) -> FxHashSet<CardKey> {
    run.iter().map(Card::key).collect()
}

/// True if two runs hold the same cards in the same order.
#[must_use]
pub fn same_cards(a: &[Card], b: &[Card]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key() == y.key())
}
