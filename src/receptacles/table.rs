//! The table: every receptacle plus the card location index.
//!
//! The `Table` owns all tableau columns, free cells and foundations and
//! tracks where each card lives. It is the only place cards move between
//! receptacles, which keeps the one-card-one-receptacle invariant:
//! - Moves insert into the target first and only then remove from the source
//! - The location index is updated for every moved card
//! - A rejected insert leaves every receptacle untouched

use rustc_hash::{FxHashMap, FxHashSet};

use super::foundation::Foundation;
use super::free_cell::FreeCell;
use super::id::ReceptacleId;
use super::receptacle::Receptacle;
use super::tableau::TableauColumn;
use crate::cards::{run_keys, Card, CardKey};
use crate::core::config::FOUNDATION_COUNT;
use crate::core::error::{EngineError, Rejection};

/// All receptacles on the table.
///
/// ## Usage
///
/// ```
/// use freecell_engine::cards::generate_deck;
/// use freecell_engine::receptacles::{Receptacle, ReceptacleId, Table};
///
/// let mut table = Table::new(8, 4);
/// table.deal(generate_deck());
///
/// assert_eq!(table.total_cards(), 52);
/// assert_eq!(table.columns()[0].len(), 7);
/// assert_eq!(table.columns()[7].len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<TableauColumn>,
    free_cells: Vec<FreeCell>,
    foundations: Vec<Foundation>,

    /// Card locations: card key -> receptacle.
    locations: FxHashMap<CardKey, ReceptacleId>,
}

impl Table {
    /// Create an empty table.
    ///
    /// Counts are clamped to `u8` indices; `EngineConfig::validate` keeps
    /// them far below that.
    #[must_use]
    pub fn new(columns: usize, free_cells: usize) -> Self {
        Self {
            columns: (0..columns).map(|i| TableauColumn::new(i as u8)).collect(),
            free_cells: (0..free_cells).map(|i| FreeCell::new(i as u8)).collect(),
            foundations: (0..FOUNDATION_COUNT).map(|i| Foundation::new(i as u8)).collect(),
            locations: FxHashMap::default(),
        }
    }

    /// Empty every receptacle.
    pub fn clear(&mut self) {
        let columns = self.columns.len();
        let free_cells = self.free_cells.len();
        *self = Self::new(columns, free_cells);
    }

    /// Clear the table and deal `cards` round-robin into the columns.
    pub fn deal(&mut self, cards: Vec<Card>) {
        let count = self.columns.len().max(1);
        let mut piles: Vec<Vec<Card>> = vec![Vec::new(); count];
        for (i, card) in cards.into_iter().enumerate() {
            piles[i % count].push(card);
        }

        self.clear();
        self.columns = piles
            .into_iter()
            .enumerate()
            .map(|(i, pile)| TableauColumn::with_cards(i as u8, pile))
            .collect();

        for column in &self.columns {
            let id = column.id();
            for card in column.cards() {
                self.locations.insert(card.key(), id);
            }
        }
    }

    /// Place cards directly into a receptacle, bypassing acceptance rules.
    ///
    /// Used to set up positions; cards already on the table are moved.
    /// Structural limits still hold: no card twice, and at most one card
    /// in a free cell. On error nothing changes.
    pub fn place(&mut self, id: ReceptacleId, cards: &[Card]) -> Result<(), EngineError> {
        let target = self.get(id).ok_or(EngineError::UnknownReceptacle(id))?;

        let keys = run_keys(cards);
        if keys.len() != cards.len() {
            let mut seen = FxHashSet::default();
            if let Some(card) = cards.iter().find(|card| !seen.insert(card.key())) {
                return Err(EngineError::DuplicateCard(card.key()));
            }
        }

        if id.is_free_cell() {
            let staying = target.cards().iter().filter(|card| !keys.contains(&card.key())).count();
            if staying + cards.len() > 1 {
                let reason = if cards.len() > 1 {
                    Rejection::MultiCardRun
                } else {
                    Rejection::CellOccupied
                };
                return Err(EngineError::IllegalMove(reason));
            }
        }
        for card in cards {
            if let Some(from) = self.locations.get(&card.key()).copied() {
                if let Some(source) = self.get_mut(from) {
                    source.remove(std::slice::from_ref(card));
                }
            }
        }
        if let Some(target) = self.get_mut(id) {
            target.pile_mut().extend(cards);
        }
        for card in cards {
            self.locations.insert(card.key(), id);
        }
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[TableauColumn] {
        &self.columns
    }

    #[must_use]
    pub fn free_cells(&self) -> &[FreeCell] {
        &self.free_cells
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    /// Look up a receptacle.
    #[must_use]
    pub fn get(&self, id: ReceptacleId) -> Option<&dyn Receptacle> {
        match id {
            ReceptacleId::Tableau(i) => self.columns.get(i as usize).map(|r| r as &dyn Receptacle),
            ReceptacleId::FreeCell(i) => self.free_cells.get(i as usize).map(|r| r as &dyn Receptacle),
            ReceptacleId::Foundation(i) => self.foundations.get(i as usize).map(|r| r as &dyn Receptacle),
        }
    }

    /// Look up a receptacle mutably.
    pub fn get_mut(&mut self, id: ReceptacleId) -> Option<&mut dyn Receptacle> {
        match id {
            ReceptacleId::Tableau(i) => self.columns.get_mut(i as usize).map(|r| r as &mut dyn Receptacle),
            ReceptacleId::FreeCell(i) => self.free_cells.get_mut(i as usize).map(|r| r as &mut dyn Receptacle),
            ReceptacleId::Foundation(i) => {
                self.foundations.get_mut(i as usize).map(|r| r as &mut dyn Receptacle)
            }
        }
    }

    /// Receptacle currently holding `card`.
    #[must_use]
    pub fn locate(&self, card: CardKey) -> Option<ReceptacleId> {
        self.locations.get(&card).copied()
    }

    /// Total cards across all free cells.
    #[must_use]
    pub fn occupied_free_cells(&self) -> usize {
        self.free_cells.iter().map(FreeCell::occupied_count).sum()
    }

    #[must_use]
    pub fn empty_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.is_empty()).count()
    }

    /// Total cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// True when every foundation is complete.
    #[must_use]
    pub fn all_foundations_complete(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Move `run` from `from` to `to`.
    ///
    /// The target's `can_accept` decides. On rejection nothing changes.
    pub fn move_run(&mut self, run: &[Card], from: ReceptacleId, to: ReceptacleId) -> Result<(), EngineError> {
        if self.get(from).is_none() {
            return Err(EngineError::UnknownReceptacle(from));
        }
        let target = self.get_mut(to).ok_or(EngineError::UnknownReceptacle(to))?;
        target.insert(run)?;

        if let Some(source) = self.get_mut(from) {
            source.remove(run);
        }
        for card in run {
            self.locations.insert(card.key(), to);
        }
        Ok(())
    }

    /// Set or clear the selection flag on `cards` inside receptacle `id`.
    pub fn set_selected(&mut self, id: ReceptacleId, cards: &[Card], selected: bool) {
        if let Some(receptacle) = self.get_mut(id) {
            receptacle.pile_mut().set_selected(&run_keys(cards), selected);
        }
    }

    /// Check the location index against receptacle contents.
    ///
    /// True iff every card sits in exactly the receptacle the index names
    /// and no card appears twice.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let receptacles = self
            .columns
            .iter()
            .map(|r| r as &dyn Receptacle)
            .chain(self.free_cells.iter().map(|r| r as &dyn Receptacle))
            .chain(self.foundations.iter().map(|r| r as &dyn Receptacle));

        let mut seen = 0;
        for receptacle in receptacles {
            for card in receptacle.cards() {
                seen += 1;
                if self.locate(card.key()) != Some(receptacle.id()) {
                    return false;
                }
            }
        }
        seen == self.locations.len()
    }
}
