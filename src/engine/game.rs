//! The FreeCell engine.
//!
//! The engine owns the table and drives the two-phase move protocol:
//!
//! 1. `select(card, source)` lifts the run from `card` to the top of
//!    `source`, if the source allows it, and marks it selected.
//! 2. `insert(run, target, source)` asks `target` to accept the run. On
//!    success the run moves; either way the selection ends.
//!
//! Every state change is reported to observers before the call returns.
//!
//! ## Usage
//!
//! ```
//! use freecell_engine::{Engine, EngineConfig, Receptacle, ReceptacleId};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
//! engine.deal();
//!
//! let source = ReceptacleId::Tableau(0);
//! let top = *engine.receptacle(source).unwrap().top().unwrap();
//!
//! let run = engine.select(top.key(), source).unwrap();
//! assert_eq!(run.len(), 1);
//!
//! engine.insert(&run, ReceptacleId::FreeCell(0), source).unwrap();
//! assert_eq!(engine.free_cells()[0].top(), Some(&top));
//! ```

use tracing::{debug, info, instrument, warn};

use super::selection::Selection;
use super::snapshot::TableSnapshot;
use crate::cards::{shuffled_deck, Card, CardKey, Run};
use crate::core::config::{ConfigError, EngineConfig};
use crate::core::error::EngineError;
use crate::core::rng::DealRng;
use crate::events::{EngineEvent, Observers, SubscriptionId};
use crate::receptacles::{Foundation, FreeCell, Receptacle, ReceptacleId, Table, TableauColumn};
use crate::rules::GameStatus;

/// FreeCell rules engine.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    table: Table,

    /// Source of per-deal seeds.
    rng: DealRng,

    /// Seed of the current deal. Before the first deal, the master seed.
    deal_seed: u64,
    deals: u32,

    selection: Option<Selection>,
    observers: Observers,

    /// Set once `Won` has been emitted for the current deal.
    won_reported: bool,
}

impl Engine {
    /// Create an engine with empty receptacles.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => DealRng::new(seed),
            None => DealRng::from_entropy(),
        };
        Ok(Self::build(config, rng))
    }

    /// Create an engine with the default table and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::build(EngineConfig::default().with_seed(seed), DealRng::new(seed))
    }

    fn build(config: EngineConfig, rng: DealRng) -> Self {
        Self {
            table: Table::new(config.columns, config.free_cells),
            deal_seed: rng.seed(),
            deals: 0,
            rng,
            config,
            selection: None,
            observers: Observers::new(),
            won_reported: false,
        }
    }

    // === Commands ===

    /// Shuffle a fresh deck and deal it round-robin into the columns.
    ///
    /// Clears free cells, foundations and any pending selection. The first
    /// deal uses the configured seed; later deals draw a new seed from it.
    #[instrument(skip(self))]
    pub fn deal(&mut self) {
        let seed = if self.deals == 0 {
            self.rng.seed()
        } else {
            self.rng.next_seed()
        };
        self.deals += 1;
        self.deal_seed = seed;

        let deck = shuffled_deck(&mut DealRng::new(seed));
        self.table.deal(deck);
        self.selection = None;
        self.won_reported = false;

        info!(seed, deal = self.deals, "Dealt new game");
        self.observers.notify(&EngineEvent::Dealt { seed });
    }

    /// Start a game. Same as `deal`.
    pub fn start(&mut self) {
        self.deal();
    }

    /// Lift the run starting at `card` from `source`.
    ///
    /// Returns the selected run, or an empty run if `source` does not allow
    /// lifting it. Any pending selection is dropped first; selecting the
    /// pending run again just drops it.
    #[instrument(skip(self))]
    pub fn select(&mut self, card: CardKey, source: ReceptacleId) -> Result<Run, EngineError> {
        let capacity = self.drag_capacity();
        let receptacle = self
            .table
            .get(source)
            .ok_or(EngineError::UnknownReceptacle(source))?;
        let mut run = receptacle.run_from(card).ok_or(EngineError::CardNotFound {
            card,
            receptacle: source,
        })?;
        let liftable = receptacle.can_be_dragged(card, capacity);

        if let Some(pending) = self.selection.take() {
            let reselected = pending.matches(&run, source);
            self.release(pending);
            if reselected {
                return Ok(Run::new());
            }
        }

        if let Err(reason) = liftable {
            debug!(%reason, "Run cannot be lifted");
            return Ok(Run::new());
        }

        self.table.set_selected(source, &run, true);
        for card in run.iter_mut() {
            card.set_selected(true);
        }
        debug!(count = run.len(), "Run selected");

        self.selection = Some(Selection::new(source, run.clone()));
        self.observers.notify(&EngineEvent::Selected {
            from: source,
            count: run.len(),
        });
        Ok(run)
    }

    /// Move the pending run from `source` to `target`.
    ///
    /// `run` and `source` must be the pending selection. On rejection no
    /// receptacle changes. Either way the selection is cleared.
    #[instrument(skip(self, run), fields(count = run.len()))]
    pub fn insert(&mut self, run: &[Card], target: ReceptacleId, source: ReceptacleId) -> Result<(), EngineError> {
        let Some(pending) = self.selection.take() else {
            warn!("Insert without a pending selection");
            return Err(EngineError::MissingSelection);
        };

        if !pending.matches(run, source) {
            let expected = pending.source();
            warn!(%expected, found = %source, "Insert does not match pending selection");
            self.selection = Some(pending);
            return Err(EngineError::SelectionMismatch {
                expected,
                found: source,
            });
        }

        match self.table.move_run(pending.cards(), source, target) {
            Ok(()) => {
                self.table.set_selected(target, pending.cards(), false);
                debug!(%source, %target, "Run moved");
                self.observers.notify(&EngineEvent::Moved {
                    from: source,
                    to: target,
                    count: pending.len(),
                });
                self.report_win();
                Ok(())
            }
            Err(EngineError::IllegalMove(reason)) => {
                self.table.set_selected(source, pending.cards(), false);
                debug!(%reason, "Move rejected");
                self.observers.notify(&EngineEvent::MoveRejected {
                    from: source,
                    to: target,
                    reason,
                });
                Err(EngineError::IllegalMove(reason))
            }
            Err(err) => {
                warn!(%err, "Move failed");
                self.release(pending);
                Err(err)
            }
        }
    }

    /// Insert the pending selection into `target`.
    pub fn place(&mut self, target: ReceptacleId) -> Result<(), EngineError> {
        let (run, source) = match &self.selection {
            Some(pending) => (Run::from_slice(pending.cards()), pending.source()),
            None => {
                warn!("Place without a pending selection");
                return Err(EngineError::MissingSelection);
            }
        };
        self.insert(&run, target, source)
    }

    /// Drop the pending selection. Returns `false` if nothing was selected.
    pub fn cancel_selection(&mut self) -> bool {
        match self.selection.take() {
            Some(pending) => {
                self.release(pending);
                true
            }
            None => false,
        }
    }

    /// Put cards straight into a receptacle, ignoring acceptance rules.
    ///
    /// For setting up positions. Cards already on the table are moved, and
    /// any pending selection is dropped. Fails on a repeated card or a free
    /// cell that would hold more than one card.
    pub fn arrange(&mut self, id: ReceptacleId, cards: &[Card]) -> Result<(), EngineError> {
        self.cancel_selection();
        self.table.place(id, cards)?;
        self.won_reported = self.table.all_foundations_complete();
        Ok(())
    }

    fn release(&mut self, pending: Selection) {
        self.table.set_selected(pending.source(), pending.cards(), false);
        debug!(from = %pending.source(), "Selection cleared");
        self.observers.notify(&EngineEvent::SelectionCleared {
            from: pending.source(),
        });
    }

    fn report_win(&mut self) {
        if !self.won_reported && self.table.all_foundations_complete() {
            self.won_reported = true;
            info!(seed = self.deal_seed, "All foundations complete");
            self.observers.notify(&EngineEvent::Won);
        }
    }

    // === Observers ===

    /// Register a callback for engine events.
    pub fn subscribe(&mut self, callback: impl FnMut(&EngineEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Remove a callback. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed that reproduces the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.deal_seed
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn columns(&self) -> &[TableauColumn] {
        self.table.columns()
    }

    #[must_use]
    pub fn free_cells(&self) -> &[FreeCell] {
        self.table.free_cells()
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        self.table.foundations()
    }

    #[must_use]
    pub fn receptacle(&self, id: ReceptacleId) -> Option<&dyn Receptacle> {
        self.table.get(id)
    }

    /// Receptacle currently holding `card`.
    #[must_use]
    pub fn locate(&self, card: CardKey) -> Option<ReceptacleId> {
        self.table.locate(card)
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Origin of the pending move, if any.
    #[must_use]
    pub fn pending_source(&self) -> Option<ReceptacleId> {
        self.selection.as_ref().map(Selection::source)
    }

    /// Longest tableau run that may currently be lifted.
    #[must_use]
    pub fn drag_capacity(&self) -> usize {
        self.config.capacity_rule.capacity(
            self.config.base_drag_capacity,
            self.table.free_cells().len(),
            self.table.occupied_free_cells(),
            self.table.empty_columns(),
        )
    }

    /// True iff all four foundations hold 13 cards.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.table.all_foundations_complete()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::from_won(self.is_won())
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(&self.table, self.pending_source(), self.status())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::build(EngineConfig::default(), DealRng::from_entropy())
    }
}
