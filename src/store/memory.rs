//! In-memory card store.
//!
//! Backs the standalone binary and the tests. Failure injection and per-status
//! write delays let tests reproduce failed writes and out-of-order completion.

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::CardStore;
use crate::card::{Card, CardId, CardPosition, StoredCard, position_of};
use crate::column::ColumnId;
use crate::error::{StoreError, StoreResult};

/// Thread-safe in-memory card store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCardStore {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    records: HashMap<CardId, StoredCard>,
    fail_loads: bool,
    fail_writes: bool,
    status_delays: HashMap<ColumnId, Duration>,
    status_writes: Vec<(CardId, ColumnId)>,
}

impl InMemoryCardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `cards`, positioned in iteration order.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let store = Self::new();
        {
            let mut state = store.lock();
            for (i, card) in cards.into_iter().enumerate() {
                state.records.insert(card.id().clone(), StoredCard { card, position: position_of(i) });
            }
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent `load_cards` fail.
    pub fn set_fail_loads(&self, fail: bool) {
        self.lock().fail_loads = fail;
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Hold status writes targeting `status` for `delay` before applying them.
    pub fn set_status_delay(&self, status: &ColumnId, delay: Duration) {
        self.lock().status_delays.insert(status.clone(), delay);
    }

    /// Current stored record for a card.
    #[must_use]
    pub fn record(&self, id: &CardId) -> Option<StoredCard> {
        self.lock().records.get(id).cloned()
    }

    /// Status writes in the order they were applied.
    #[must_use]
    pub fn status_writes(&self) -> Vec<(CardId, ColumnId)> {
        self.lock().status_writes.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.lock().fail_writes {
            return Err(StoreError::Unavailable("writes are failing".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn load_cards(&self) -> StoreResult<Vec<StoredCard>> {
        let state = self.lock();
        if state.fail_loads {
            return Err(StoreError::Unavailable("reads are failing".into()));
        }
        let mut records: Vec<StoredCard> = state.records.values().cloned().collect();
        records.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.card.id().cmp(b.card.id())));
        Ok(records)
    }

    async fn create_card(&self, record: &StoredCard) -> StoreResult<()> {
        self.check_writable()?;
        let mut state = self.lock();
        if state.records.contains_key(record.card.id()) {
            return Err(StoreError::Duplicate(record.card.id().clone()));
        }
        state.records.insert(record.card.id().clone(), record.clone());
        Ok(())
    }

    async fn update_status(&self, id: &CardId, status: &ColumnId) -> StoreResult<()> {
        self.check_writable()?;
        let delay = self.lock().status_delays.get(status).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        let Some(record) = state.records.get_mut(id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        record.card.set_status(status.clone());
        state.status_writes.push((id.clone(), status.clone()));
        Ok(())
    }

    async fn update_card(&self, card: &Card) -> StoreResult<()> {
        self.check_writable()?;
        let mut state = self.lock();
        let Some(record) = state.records.get_mut(card.id()) else {
            return Err(StoreError::NotFound(card.id().clone()));
        };
        record.card = card.clone();
        Ok(())
    }

    async fn update_positions(&self, positions: &[CardPosition]) -> StoreResult<()> {
        self.check_writable()?;
        let mut state = self.lock();
        for entry in positions {
            if let Some(record) = state.records.get_mut(&entry.id) {
                record.position = entry.position;
            }
        }
        Ok(())
    }

    async fn delete_card(&self, id: &CardId) -> StoreResult<()> {
        self.check_writable()?;
        if self.lock().records.remove(id).is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
