//! Persistence bridge: fire-and-forget mirroring of board changes.
//!
//! DESIGN
//! ======
//! The engine applies every change in memory first. Only afterwards does the
//! host hand the resulting actions to this bridge, which spawns one
//! independent background write per change. Each write carries an owned
//! snapshot of the values at the moment it was issued, so later local edits
//! can't alter a write already in flight.
//!
//! Writes are neither queued nor ordered against each other. Two status
//! writes for the same card race and whichever completes last wins in the
//! store, even if it carries the older value.
//!
//! ERROR HANDLING
//! ==============
//! A failed write is logged and reported on the notification channel. It is
//! not retried and the local change is not rolled back: memory and store stay
//! divergent until a later write for that card succeeds or the board reloads.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::card::{Card, CardId, CardPosition, StoredCard};
use crate::column::ColumnId;
use crate::engine::Action;
use crate::error::{BoardError, StoreResult, WriteOp};
use crate::notify::Notifier;
use crate::store::CardStore;

/// Result of one background write.
pub type WriteOutcome = Result<(), BoardError>;

#[derive(Clone)]
pub struct PersistenceBridge {
    store: Arc<dyn CardStore>,
    notifier: Notifier,
}

impl PersistenceBridge {
    #[must_use]
    pub fn new(store: Arc<dyn CardStore>, notifier: Notifier) -> Self {
        Self { store, notifier }
    }

    /// The store writes go to.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CardStore> {
        &self.store
    }

    /// Persist a card's new column.
    pub fn commit_status_change(&self, id: CardId, status: ColumnId) -> JoinHandle<WriteOutcome> {
        let store = Arc::clone(&self.store);
        let key = id.clone();
        self.spawn_write(WriteOp::Status, Some(key), async move { store.update_status(&id, &status).await })
    }

    /// Persist an edited card: fields and current status together.
    pub fn commit_field_edit(&self, card: Card) -> JoinHandle<WriteOutcome> {
        let store = Arc::clone(&self.store);
        let key = card.id().clone();
        self.spawn_write(WriteOp::Fields, Some(key), async move { store.update_card(&card).await })
    }

    pub fn commit_create(&self, record: StoredCard) -> JoinHandle<WriteOutcome> {
        let store = Arc::clone(&self.store);
        let key = record.card.id().clone();
        self.spawn_write(WriteOp::Create, Some(key), async move { store.create_card(&record).await })
    }

    pub fn commit_delete(&self, id: CardId) -> JoinHandle<WriteOutcome> {
        let store = Arc::clone(&self.store);
        let key = id.clone();
        self.spawn_write(WriteOp::Delete, Some(key), async move { store.delete_card(&id).await })
    }

    pub fn commit_order(&self, positions: Vec<CardPosition>) -> JoinHandle<WriteOutcome> {
        let store = Arc::clone(&self.store);
        self.spawn_write(WriteOp::Order, None, async move { store.update_positions(&positions).await })
    }

    /// Route one engine action to its write. Render-only actions yield `None`.
    pub fn commit(&self, action: &Action) -> Option<JoinHandle<WriteOutcome>> {
        match action {
            Action::StatusChanged { id, status } => Some(self.commit_status_change(id.clone(), status.clone())),
            Action::OrderChanged(positions) => Some(self.commit_order(positions.clone())),
            Action::CardCreated(record) => Some(self.commit_create(record.clone())),
            Action::CardEdited(card) => Some(self.commit_field_edit(card.clone())),
            Action::CardDeleted { id } => Some(self.commit_delete(id.clone())),
            Action::RenderNeeded | Action::OverlayCleared => None,
        }
    }

    fn spawn_write<F>(&self, op: WriteOp, id: Option<CardId>, write: F) -> JoinHandle<WriteOutcome>
    where
        F: Future<Output = StoreResult<()>> + Send + 'static,
    {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            match write.await {
                Ok(()) => {
                    debug!(%op, card_id = ?id, "write committed");
                    Ok(())
                }
                Err(source) => {
                    error!(%op, card_id = ?id, error = %source, "write failed; local state kept");
                    let err = BoardError::WriteFailure { op, id, source };
                    notifier.report(&err);
                    Err(err)
                }
            }
        })
    }
}
