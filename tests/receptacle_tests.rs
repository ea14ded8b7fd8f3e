//! Receptacle rule tests.
//!
//! These tests exercise the three receptacle variants through the shared
//! `Receptacle` trait, the way the engine drives them.

use freecell_engine::cards::{Card, Suit};
use freecell_engine::core::Rejection;
use freecell_engine::receptacles::{Foundation, FreeCell, Receptacle, ReceptacleId, Table, TableauColumn};

fn c(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

// =============================================================================
// Tableau Column Tests
// =============================================================================

/// Any run may start an empty column.
#[test]
fn test_empty_column_accepts_any_run() {
    let mut column = TableauColumn::new(0);
    assert_eq!(column.insert(&[c(Suit::Diamonds, 1)]), Ok(()));
    assert_eq!(column.len(), 1);
}

/// A run must continue the column downward in alternating color.
#[test]
fn test_column_acceptance() {
    let column = TableauColumn::with_cards(0, [c(Suit::Spades, 6)]);

    assert_eq!(column.can_accept(&[c(Suit::Diamonds, 5)]), Ok(()));
    assert_eq!(column.can_accept(&[c(Suit::Clubs, 5)]), Err(Rejection::SameColor));
    assert_eq!(column.can_accept(&[c(Suit::Diamonds, 4)]), Err(Rejection::RankGap));
    assert_eq!(column.can_accept(&[c(Suit::Hearts, 8)]), Err(Rejection::RankNotBelow));
}

/// Only the head of a multi-card run is compared to the column top.
#[test]
fn test_column_accepts_run_by_head() {
    let mut column = TableauColumn::with_cards(0, [c(Suit::Spades, 6)]);
    let run = [c(Suit::Hearts, 5), c(Suit::Clubs, 4), c(Suit::Diamonds, 3)];

    assert_eq!(column.insert(&run), Ok(()));
    assert_eq!(column.len(), 4);
    assert_eq!(column.top(), Some(&c(Suit::Diamonds, 3)));
}

/// A rejected insert leaves the column unchanged.
#[test]
fn test_rejected_insert_is_noop() {
    let mut column = TableauColumn::with_cards(0, [c(Suit::Spades, 6)]);
    assert!(column.insert(&[c(Suit::Clubs, 5)]).is_err());
    assert_eq!(column.len(), 1);
}

/// Drag checks cover sequencing, alternation and capacity.
#[test]
fn test_column_drag_rules() {
    let column = TableauColumn::with_cards(
        0,
        [
            c(Suit::Clubs, 9),
            c(Suit::Spades, 6),
            c(Suit::Hearts, 5),
            c(Suit::Clubs, 4),
        ],
    );

    assert_eq!(column.can_be_dragged(c(Suit::Spades, 6).key(), 5), Ok(()));
    assert_eq!(column.can_be_dragged(c(Suit::Hearts, 5).key(), 2), Ok(()));
    assert_eq!(
        column.can_be_dragged(c(Suit::Spades, 6).key(), 2),
        Err(Rejection::ExceedsCapacity { run_len: 3, capacity: 2 })
    );
    assert_eq!(
        column.can_be_dragged(c(Suit::Clubs, 9).key(), 5),
        Err(Rejection::NotSequenced)
    );
    assert_eq!(
        column.can_be_dragged(c(Suit::Diamonds, 1).key(), 5),
        Err(Rejection::NotInReceptacle)
    );
}

/// Removal is by identity and keeps the order of the rest.
#[test]
fn test_remove_by_identity() {
    let mut column = TableauColumn::with_cards(
        0,
        [c(Suit::Clubs, 9), c(Suit::Spades, 6), c(Suit::Hearts, 5)],
    );

    assert_eq!(column.remove(&[c(Suit::Spades, 6)]), 1);
    let left: Vec<_> = column.cards().iter().copied().collect();
    assert_eq!(left, vec![c(Suit::Clubs, 9), c(Suit::Hearts, 5)]);

    assert_eq!(column.remove(&[c(Suit::Diamonds, 0)]), 0);
}

// =============================================================================
// Free Cell Tests
// =============================================================================

/// A free cell holds exactly one card.
#[test]
fn test_free_cell_holds_one_card() {
    let mut cell = FreeCell::new(0);

    assert_eq!(
        cell.can_accept(&[c(Suit::Hearts, 3), c(Suit::Clubs, 2)]),
        Err(Rejection::MultiCardRun)
    );
    assert_eq!(cell.insert(&[c(Suit::Hearts, 3)]), Ok(()));
    assert_eq!(cell.insert(&[c(Suit::Clubs, 2)]), Err(Rejection::CellOccupied));
    assert_eq!(cell.len(), 1);
}

/// The card in a free cell can always be lifted.
#[test]
fn test_free_cell_drag() {
    let mut cell = FreeCell::new(2);
    cell.insert(&[c(Suit::Hearts, 3)]).unwrap();

    assert_eq!(cell.can_be_dragged(c(Suit::Hearts, 3).key(), 0), Ok(()));
    assert_eq!(cell.id(), ReceptacleId::FreeCell(2));
}

// =============================================================================
// Foundation Tests
// =============================================================================

/// An empty foundation takes only an ace.
#[test]
fn test_foundation_starts_with_ace() {
    let mut foundation = Foundation::new(0);

    assert_eq!(foundation.insert(&[c(Suit::Diamonds, 1)]), Err(Rejection::NotAnAce));
    assert_eq!(foundation.insert(&[c(Suit::Diamonds, 0)]), Ok(()));
    assert_eq!(foundation.suit(), Some(Suit::Diamonds));
}

/// A foundation builds up in one suit, one card at a time.
#[test]
fn test_foundation_builds_up_in_suit() {
    let mut foundation = Foundation::new(0);
    foundation.insert(&[c(Suit::Hearts, 0)]).unwrap();

    assert_eq!(foundation.can_accept(&[c(Suit::Diamonds, 1)]), Err(Rejection::WrongSuit));
    assert_eq!(foundation.can_accept(&[c(Suit::Hearts, 2)]), Err(Rejection::NotNextRank));
    assert_eq!(
        foundation.can_accept(&[c(Suit::Hearts, 1), c(Suit::Hearts, 2)]),
        Err(Rejection::MultiCardRun)
    );

    for rank in 1..13 {
        foundation.insert(&[c(Suit::Hearts, rank)]).unwrap();
    }
    assert!(foundation.is_complete());
}

// =============================================================================
// Table Tests
// =============================================================================

/// Moving a run updates both receptacles and the location index.
#[test]
fn test_table_move_run() {
    let mut table = Table::new(8, 4);
    table.place(ReceptacleId::Tableau(0), &[c(Suit::Spades, 6)]).unwrap();
    table
        .place(ReceptacleId::Tableau(1), &[c(Suit::Clubs, 9), c(Suit::Hearts, 5)])
        .unwrap();

    table
        .move_run(&[c(Suit::Hearts, 5)], ReceptacleId::Tableau(1), ReceptacleId::Tableau(0))
        .unwrap();

    assert_eq!(table.columns()[0].len(), 2);
    assert_eq!(table.columns()[1].len(), 1);
    assert_eq!(table.locate(c(Suit::Hearts, 5).key()), Some(ReceptacleId::Tableau(0)));
    assert!(table.is_consistent());
}

/// A rejected move changes nothing.
#[test]
fn test_table_rejected_move() {
    let mut table = Table::new(8, 4);
    table.place(ReceptacleId::FreeCell(0), &[c(Suit::Spades, 6)]).unwrap();
    table.place(ReceptacleId::Tableau(0), &[c(Suit::Clubs, 9)]).unwrap();

    assert!(table
        .move_run(&[c(Suit::Clubs, 9)], ReceptacleId::Tableau(0), ReceptacleId::FreeCell(0))
        .is_err());
    assert_eq!(table.columns()[0].len(), 1);
    assert_eq!(table.locate(c(Suit::Clubs, 9).key()), Some(ReceptacleId::Tableau(0)));
    assert!(table.is_consistent());
}

/// Occupancy counts feed the drag capacity.
#[test]
fn test_table_occupancy() {
    let mut table = Table::new(8, 4);
    assert_eq!(table.empty_columns(), 8);

    table.place(ReceptacleId::FreeCell(1), &[c(Suit::Spades, 6)]).unwrap();
    table.place(ReceptacleId::Tableau(3), &[c(Suit::Clubs, 9)]).unwrap();

    assert_eq!(table.occupied_free_cells(), 1);
    assert_eq!(table.empty_columns(), 7);
    assert_eq!(table.total_cards(), 2);
}
