//! Deck generation and shuffling.
//!
//! The deck is generated suit by suit in deal order, ranks ascending. The
//! shuffle draws one uniformly-sampled remaining card per position, so it
//! makes exactly as many draws as there are cards.

use super::card::{Card, Suit, KING, RANKS_PER_SUIT};
use crate::core::rng::DealRng;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Generate the ordered 52-card deck.
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 0..=KING {
            deck.push(Card::new(suit, rank));
        }
    }
    debug_assert_eq!(deck.len(), Suit::ALL.len() * RANKS_PER_SUIT);
    deck
}

/// Shuffle by drawing without replacement.
///
/// Each step removes a uniformly chosen card from what remains and appends
/// it to the output.
#[must_use]
pub fn shuffle(mut deck: Vec<Card>, rng: &mut DealRng) -> Vec<Card> {
    let mut shuffled = Vec::with_capacity(deck.len());
    while !deck.is_empty() {
        let index = rng.gen_index(deck.len());
        shuffled.push(deck.remove(index));
    }
    shuffled
}

/// Generate and shuffle a fresh deck.
#[must_use]
pub fn shuffled_deck(rng: &mut DealRng) -> Vec<Card> {
    shuffle(generate_deck(), rng)
}
