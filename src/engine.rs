//! Reorder/reassign engine.
//!
//! DESIGN
//! ======
//! `EngineCore` owns the card registry, the column set, and the gesture. Every
//! entry point mutates the registry synchronously and returns the [`Action`]s
//! that describe what changed; the host renders on `RenderNeeded` and hands
//! the rest to the persistence bridge. Nothing here awaits or performs I/O,
//! so the whole state machine is testable without a runtime.
//!
//! A move over another card first adopts that card's column, then moves the
//! dragged card to the other card's index in the global order. A move over a
//! column only adopts the column; the card keeps its global index.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashSet;

use tracing::debug;

use crate::card::{Card, CardFields, CardId, CardPosition, StoredCard, position_of};
use crate::column::{Column, ColumnId, ColumnSet};
use crate::config::OrderPersistence;
use crate::error::BoardError;
use crate::gesture::Gesture;
use crate::registry::CardRegistry;
use crate::resolve::DropTarget;

/// Changes produced by the engine for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A card moved to another column.
    StatusChanged { id: CardId, status: ColumnId },
    /// Global order to persist after a drop.
    OrderChanged(Vec<CardPosition>),
    /// A new card was appended.
    CardCreated(StoredCard),
    /// A card was replaced by an edited record.
    CardEdited(Card),
    CardDeleted { id: CardId },
    RenderNeeded,
    /// The drag overlay should be hidden.
    OverlayCleared,
}

/// One column and the cards currently stacked in it.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub cards: Vec<&'a Card>,
}

impl ColumnView<'_> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Board state machine: `Idle` ⇄ `Dragging`, plus the non-gesture edits.
#[derive(Debug, Default)]
pub struct EngineCore {
    registry: CardRegistry,
    columns: ColumnSet,
    gesture: Gesture,
    order_persistence: OrderPersistence,
    /// Position for the next created card, above every stored position.
    next_position: i64,
}

impl EngineCore {
    #[must_use]
    pub fn new(columns: ColumnSet, order_persistence: OrderPersistence) -> Self {
        Self { registry: CardRegistry::new(), columns, gesture: Gesture::Idle, order_persistence, next_position: 0 }
    }

    // --- Data inputs ---

    /// Replace the registry with cards loaded from the store.
    ///
    /// Records are placed in `position` order. Any gesture is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LoadFailure`] if a card's status is not a column
    /// of this board or two cards share an id. The registry is left empty.
    pub fn load_snapshot(&mut self, mut records: Vec<StoredCard>) -> Result<usize, BoardError> {
        self.clear();
        records.sort_by_key(|r| r.position);

        let next_position = records.last().map_or(0, |r| r.position.saturating_add(1));
        let mut seen = HashSet::new();
        let mut cards = Vec::with_capacity(records.len());
        for record in records {
            let card = record.card;
            if !self.columns.contains(card.status().as_str()) {
                return Err(BoardError::LoadFailure(format!(
                    "card {} has unknown status {}",
                    card.id(),
                    card.status()
                )));
            }
            if !seen.insert(card.id().clone()) {
                return Err(BoardError::LoadFailure(format!("duplicate card id {}", card.id())));
            }
            cards.push(card);
        }

        let count = cards.len();
        self.registry.replace_ordering(cards);
        self.next_position = next_position.max(0);
        Ok(count)
    }

    /// Empty the registry and return to `Idle`.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.gesture = Gesture::Idle;
        self.next_position = 0;
    }

    /// Swap the column set.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GestureInProgress`] while dragging and
    /// [`BoardError::UnknownColumn`] if a card's status would fall outside the
    /// new set.
    pub fn set_columns(&mut self, columns: ColumnSet) -> Result<(), BoardError> {
        if let Some(active) = self.gesture.active_id() {
            return Err(BoardError::GestureInProgress(active.clone()));
        }
        if let Some(orphan) = self.registry.iter().find(|c| !columns.contains(c.status().as_str())) {
            return Err(BoardError::UnknownColumn(orphan.status().clone()));
        }
        self.columns = columns;
        Ok(())
    }

    // --- Gesture ---

    /// Begin dragging `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GestureInProgress`] if a drag is already active
    /// and [`BoardError::CardNotFound`] if `id` isn't on the board.
    pub fn drag_start(&mut self, id: &CardId) -> Result<Vec<Action>, BoardError> {
        if let Some(active) = self.gesture.active_id() {
            return Err(BoardError::GestureInProgress(active.clone()));
        }
        if !self.registry.contains(id) {
            return Err(BoardError::CardNotFound(id.clone()));
        }
        self.gesture = Gesture::Dragging { active: id.clone(), last_target: None, origin_order: self.registry.ids() };
        debug!(card_id = %id, "drag started");
        Ok(vec![Action::RenderNeeded])
    }

    /// Apply a move-over event. A no-op when idle or when `target` repeats the
    /// previous event's target.
    pub fn drag_over(&mut self, target: &DropTarget) -> Vec<Action> {
        let Gesture::Dragging { active, last_target, .. } = &self.gesture else {
            return Vec::new();
        };
        if last_target.as_ref() == Some(target) {
            return Vec::new();
        }
        let active = active.clone();

        let actions = match target {
            DropTarget::None => Vec::new(),
            DropTarget::OverCard(over) => self.move_over_card(&active, over),
            DropTarget::OverColumn(column) => self.move_over_column(&active, column),
        };

        if let Gesture::Dragging { last_target, .. } = &mut self.gesture {
            *last_target = Some(target.clone());
        }
        actions
    }

    /// Finish the drag. The registry keeps whatever the last move left.
    pub fn drag_end(&mut self) -> Vec<Action> {
        let Gesture::Dragging { active, origin_order, .. } = std::mem::take(&mut self.gesture) else {
            return Vec::new();
        };
        debug!(card_id = %active, "drag finished");

        let mut actions = Vec::new();
        if self.order_persistence == OrderPersistence::OnDrop && origin_order != self.registry.ids() {
            actions.push(Action::OrderChanged(self.registry.positions()));
            self.next_position = self.next_position.max(position_of(self.registry.len()));
        }
        actions.push(Action::OverlayCleared);
        actions
    }

    /// Abandon the drag. Identical to [`Self::drag_end`]: nothing is rolled back.
    pub fn drag_cancel(&mut self) -> Vec<Action> {
        self.drag_end()
    }

    fn move_over_card(&mut self, active: &CardId, over: &CardId) -> Vec<Action> {
        if active == over {
            return Vec::new();
        }
        let (Some(from), Some(to)) = (self.registry.index_of(active), self.registry.index_of(over)) else {
            return Vec::new();
        };
        let Some(over_status) = self.registry.find(over).map(|c| c.status().clone()) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if self.reassign(active, &over_status) {
            actions.push(Action::StatusChanged { id: active.clone(), status: over_status });
        }
        let moved = from != to && self.registry.move_card(from, to);
        if moved || !actions.is_empty() {
            debug!(card_id = %active, from, to, "card moved over card");
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn move_over_column(&mut self, active: &CardId, column: &ColumnId) -> Vec<Action> {
        if !self.columns.contains(column.as_str()) || !self.reassign(active, column) {
            return Vec::new();
        }
        debug!(card_id = %active, column = %column, "card moved over column");
        vec![Action::StatusChanged { id: active.clone(), status: column.clone() }, Action::RenderNeeded]
    }

    /// Set `id`'s status if it differs. Returns true on change.
    fn reassign(&mut self, id: &CardId, status: &ColumnId) -> bool {
        let mut changed = false;
        self.registry.update_one(id, |card| {
            if card.status() != status {
                card.set_status(status.clone());
                changed = true;
            }
        });
        changed
    }

    // --- Edits ---

    /// Append a card with default fields to `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] if `column` isn't on the board.
    pub fn create_card(&mut self, column: &ColumnId) -> Result<(CardId, Vec<Action>), BoardError> {
        if !self.columns.contains(column.as_str()) {
            return Err(BoardError::UnknownColumn(column.clone()));
        }
        let card = Card::new(CardId::generate(), column.clone(), CardFields::default());
        let id = card.id().clone();
        let position = self.next_position;
        self.next_position = self.next_position.saturating_add(1);
        self.registry.push(card.clone());
        debug!(card_id = %id, column = %column, "card created");
        Ok((id, vec![Action::CardCreated(StoredCard { card, position }), Action::RenderNeeded]))
    }

    /// Remove a card. Deleting the dragged card ends the gesture.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] if `id` isn't on the board.
    pub fn delete_card(&mut self, id: &CardId) -> Result<Vec<Action>, BoardError> {
        if self.registry.remove(id).is_none() {
            return Err(BoardError::CardNotFound(id.clone()));
        }
        if self.gesture.active_id() == Some(id) {
            self.gesture = Gesture::Idle;
        }
        debug!(card_id = %id, "card deleted");
        Ok(vec![Action::CardDeleted { id: id.clone() }, Action::RenderNeeded])
    }

    /// Replace a card with a full edited record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] if the record's status isn't on
    /// the board and [`BoardError::CardNotFound`] if its id isn't.
    pub fn edit_card(&mut self, card: Card) -> Result<Vec<Action>, BoardError> {
        if !self.columns.contains(card.status().as_str()) {
            return Err(BoardError::UnknownColumn(card.status().clone()));
        }
        let id = card.id().clone();
        let snapshot = card.clone();
        if !self.registry.update_one(&id, move |existing| *existing = card) {
            return Err(BoardError::CardNotFound(id));
        }
        debug!(card_id = %id, "card edited");
        Ok(vec![Action::CardEdited(snapshot), Action::RenderNeeded])
    }

    /// Move a card to `column` from the card's own status picker.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] or [`BoardError::CardNotFound`].
    pub fn set_status(&mut self, id: &CardId, column: &ColumnId) -> Result<Vec<Action>, BoardError> {
        if !self.columns.contains(column.as_str()) {
            return Err(BoardError::UnknownColumn(column.clone()));
        }
        if !self.registry.contains(id) {
            return Err(BoardError::CardNotFound(id.clone()));
        }
        if !self.reassign(id, column) {
            return Ok(Vec::new());
        }
        Ok(vec![Action::StatusChanged { id: id.clone(), status: column.clone() }, Action::RenderNeeded])
    }

    // --- Queries ---

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.registry.find(id)
    }

    /// The card being dragged, for the drag overlay.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.gesture.active_id().and_then(|id| self.registry.find(id))
    }

    /// Every column with its card stack, left to right.
    #[must_use]
    pub fn column_views(&self) -> Vec<ColumnView<'_>> {
        self.columns
            .iter()
            .map(|column| ColumnView { column, cards: self.registry.filter_by_status(column.id.as_str()) })
            .collect()
    }
}
