//! Playing card values.
//!
//! A `Card` is a plain value: suit and rank are fixed at construction and
//! color is derived from the suit. The only mutable part is the UI-facing
//! selection flag, which never takes part in equality or hashing.
//!
//! ## Usage
//!
//! ```
//! use freecell_engine::cards::{Card, Suit};
//!
//! let seven = Card::new(Suit::Spades, 6);
//! let six = Card::new(Suit::Diamonds, 5);
//!
//! assert!(seven.is_higher_in_rank(&six));
//! assert!(!seven.is_same_color(&six));
//! assert_eq!(six.id(), "5diamonds");
//! assert_eq!(six.image(), "/images/6diamonds.png");
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Rank of an ace (ranks are ace-low, 0-based).
pub const ACE: u8 = 0;
/// Rank of a king.
pub const KING: u8 = 12;
/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit.
///
/// Declaration order is the deal order: diamonds, spades, hearts, clubs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    /// All suits in deal order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    /// Color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Lowercase name, as used in card ids and image paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
        }
    }

    /// Suit symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
        }
    }

    /// Position of this suit in deal order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color, derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// Stable identity of a card: its rank and suit.
///
/// Used for lookups and equality. Displays as `"{rank}{suit}"`, e.g. `"0diamonds"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: u8,
}

impl CardKey {
    /// Create a card key.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Rank outside `ACE..=KING`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display("card rank must be 0-12, got {}", _0)]
pub struct InvalidRank(pub u8);

impl std::error::Error for InvalidRank {}

/// Serialized form of a `Card`, checked by `TryFrom` before it becomes one.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RawCard {
    pub suit: Suit,
    pub rank: u8,
    #[serde(default)]
    pub selected: bool,
}

impl TryFrom<RawCard> for Card {
    type Error = InvalidRank;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let mut card = Card::try_new(raw.suit, raw.rank).ok_or(InvalidRank(raw.rank))?;
        card.selected = raw.selected;
        Ok(card)
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
    selected: bool,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `rank` is greater than `KING`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!(rank <= KING, "Card rank must be 0-12, got {}", rank);
        Self {
            suit,
            rank,
            selected: false,
        }
    }

    /// Create a card, returning `None` for an out-of-range rank.
    #[must_use]
    pub fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        (rank <= KING).then(|| Self::new(suit, rank))
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn key(&self) -> CardKey {
        CardKey::new(self.suit, self.rank)
    }

    /// Textual identity, e.g. `"11hearts"` for the queen of hearts.
    #[must_use]
    pub fn id(&self) -> String {
        self.key().to_string()
    }

    /// Display asset path for the presentation layer.
    ///
    /// Asset files are numbered 1-13, so the rank is shifted by one.
    #[must_use]
    pub fn image(&self) -> String {
        format!("/images/{}{}.png", self.rank + 1, self.suit)
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank == KING
    }

    #[must_use]
    pub fn is_same_suit(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    #[must_use]
    pub fn is_same_color(&self, other: &Card) -> bool {
        self.color() == other.color()
    }

    /// True iff this card's rank strictly exceeds `other`'s.
    #[must_use]
    pub fn is_higher_in_rank(&self, other: &Card) -> bool {
        self.rank > other.rank
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.key().hash(hasher);
    }
}

impl From<Card> for CardKey {
    fn from(card: Card) -> Self {
        card.key()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.rank {
            0 => "A",
            10 => "J",
            11 => "Q",
            12 => "K",
            n => return write!(f, "{}{}", n + 1, self.suit.symbol()),
        };
        write!(f, "{}{}", label, self.suit.symbol())
    }
}
