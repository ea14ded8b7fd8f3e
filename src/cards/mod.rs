//! Card model: cards, the deck, and runs.
//!
//! ## Key Types
//!
//! - `Card`: One playing card (suit, rank, selection flag)
//! - `CardKey`: Stable identity used for lookups
//! - `Suit` / `Color`: Suit enumeration in deal order and derived color
//! - `Run`: Cards lifted together from one receptacle

pub mod card;
pub mod deck;
pub mod run;

pub use card::{Card, CardKey, Color, InvalidRank, Suit, ACE, KING, RANKS_PER_SUIT};
pub use deck::{generate_deck, shuffle, shuffled_deck, DECK_SIZE};
pub use run::{run_keys, same_cards, Run};
