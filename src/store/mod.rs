//! Durable card store port.
//!
//! The board treats its backing store as a record store keyed by card id.
//! Adapters: [`memory::InMemoryCardStore`] for tests and the standalone
//! binary, [`postgres::PgCardStore`] for a real database.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::card::{Card, CardId, CardPosition, StoredCard};
use crate::column::ColumnId;
use crate::error::StoreResult;

pub use memory::InMemoryCardStore;
pub use postgres::PgCardStore;

/// Card persistence contract.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Every stored card, ordered by `position`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] when the store can't be read or
    /// a record can't be decoded.
    async fn load_cards(&self) -> StoreResult<Vec<StoredCard>>;

    /// Store a new card.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Duplicate`] if the id exists.
    async fn create_card(&self, record: &StoredCard) -> StoreResult<()>;

    /// Overwrite one card's column assignment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if the card is missing.
    async fn update_status(&self, id: &CardId, status: &ColumnId) -> StoreResult<()>;

    /// Overwrite a card's fields and status. Position is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if the card is missing.
    async fn update_card(&self, card: &Card) -> StoreResult<()>;

    /// Rewrite positions. Ids no longer in the store are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] when the write fails.
    async fn update_positions(&self, positions: &[CardPosition]) -> StoreResult<()>;

    /// Remove a card.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if the card is missing.
    async fn delete_card(&self, id: &CardId) -> StoreResult<()>;
}
