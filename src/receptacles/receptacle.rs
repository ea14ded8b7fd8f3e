//! The receptacle contract shared by tableau columns, free cells and
//! foundations.
//!
//! Storage lives in a `Pile` (an ordered `im::Vector`, last element = top).
//! Each variant supplies its own `can_accept` and, where it differs from the
//! default, `can_be_dragged`. Everything else is provided by the trait.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::id::ReceptacleId;
use crate::cards::{run_keys, Card, CardKey, Run};
use crate::core::error::{EngineError, Rejection};

/// Ordered card storage. Index 0 is the bottom, the last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile holding `cards`, bottom first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Index of the card with this identity.
    #[must_use]
    pub fn position(&self, key: CardKey) -> Option<usize> {
        self.cards.iter().position(|c| c.key() == key)
    }

    /// The card at `index` and everything above it.
    #[must_use]
    pub fn run_from(&self, index: usize) -> Run {
        self.cards.iter().skip(index).copied().collect()
    }

    pub fn extend(&mut self, run: &[Card]) {
        for card in run {
            self.cards.push_back(*card);
        }
    }

    /// Remove every card whose key is in `keys`, keeping the rest in order.
    ///
    /// Returns the number of cards removed.
    pub fn remove(&mut self, keys: &FxHashSet<CardKey>) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| !keys.contains(&c.key()));
        before - self.cards.len()
    }

    /// Set the selection flag on every card whose key is in `keys`.
    pub fn set_selected(&mut self, keys: &FxHashSet<CardKey>, selected: bool) {
        for card in self.cards.iter_mut() {
            if keys.contains(&card.key()) {
                card.set_selected(selected);
            }
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Shared contract for every place a card can sit.
///
/// ## Implementation Notes
///
/// - `can_accept`: Must not mutate; `insert` calls it before appending
/// - `can_be_dragged`: Default accepts any card that is present
/// - `insert`/`remove` do not maintain the one-card-one-receptacle
///   invariant on their own; the `Table` does that by pairing them
pub trait Receptacle: std::fmt::Debug {
    fn id(&self) -> ReceptacleId;

    fn pile(&self) -> &Pile;

    fn pile_mut(&mut self) -> &mut Pile;

    /// Whether `run` may be appended to this receptacle.
    fn can_accept(&self, run: &[Card]) -> Result<(), Rejection>;

    /// Whether the run starting at `card` may be lifted.
    ///
    /// `capacity` is the current maximum run length for multi-card lifts.
    fn can_be_dragged(&self, card: CardKey, capacity: usize) -> Result<(), Rejection> {
        let _ = capacity;
        self.position(card).map(|_| ()).ok_or(Rejection::NotInReceptacle)
    }

    // === Provided Methods ===

    fn cards(&self) -> &Vector<Card> {
        self.pile().cards()
    }

    fn len(&self) -> usize {
        self.pile().len()
    }

    fn is_empty(&self) -> bool {
        self.pile().is_empty()
    }

    /// The exposed card, or `None` when empty.
    fn top(&self) -> Option<&Card> {
        self.pile().top()
    }

    /// The exposed card, failing explicitly when empty.
    fn try_top(&self) -> Result<&Card, EngineError> {
        self.top().ok_or(EngineError::EmptyReceptacle(self.id()))
    }

    fn position(&self, card: CardKey) -> Option<usize> {
        self.pile().position(card)
    }

    /// The run from `card` to the top, or `None` if the card is not here.
    fn run_from(&self, card: CardKey) -> Option<Run> {
        self.position(card).map(|index| self.pile().run_from(index))
    }

    /// Append `run` if `can_accept` allows it. No mutation on rejection.
    fn insert(&mut self, run: &[Card]) -> Result<(), Rejection> {
        self.can_accept(run)?;
        self.pile_mut().extend(run);
        Ok(())
    }

    /// Remove the given cards by identity. Returns how many were removed.
    fn remove(&mut self, cards: &[Card]) -> usize {
        self.pile_mut().remove(&run_keys(cards))
    }
}
