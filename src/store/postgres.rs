//! Postgres card store.
//!
//! One row per card in `cards`. Payload fields live in a `jsonb` column so
//! unknown keys survive untouched. Rows are read back ordered by `position`,
//! with creation time breaking ties.

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;

use async_trait::async_trait;
use sqlx::PgPool;

use super::CardStore;
use crate::card::{Card, CardFields, CardId, CardPosition, StoredCard};
use crate::column::ColumnId;
use crate::error::{StoreError, StoreResult};

type CardRow = (String, String, i64, serde_json::Value);

#[derive(Debug, Clone)]
pub struct PgCardStore {
    pool: PgPool,
}

impl PgCardStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_record((id, status, position, fields): CardRow) -> StoreResult<StoredCard> {
    let fields: CardFields = serde_json::from_value(fields).map_err(|source| StoreError::Decode { id: id.clone(), source })?;
    Ok(StoredCard { card: Card::new(CardId::new(id), ColumnId::new(status), fields), position })
}

fn fields_json(card: &Card) -> StoreResult<serde_json::Value> {
    serde_json::to_value(&card.fields).map_err(|source| StoreError::Decode { id: card.id().to_string(), source })
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn load_cards(&self) -> StoreResult<Vec<StoredCard>> {
        let rows = sqlx::query_as::<_, CardRow>(
            "SELECT id, status, position, fields
             FROM cards
             ORDER BY position ASC, created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn create_card(&self, record: &StoredCard) -> StoreResult<()> {
        let fields = fields_json(&record.card)?;
        let result = sqlx::query(
            "INSERT INTO cards (id, status, position, fields, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, now(), now()) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(record.card.id().as_str())
        .bind(record.card.status().as_str())
        .bind(record.position)
        .bind(&fields)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Duplicate(record.card.id().clone()));
        }
        Ok(())
    }

    async fn update_status(&self, id: &CardId, status: &ColumnId) -> StoreResult<()> {
        let result = sqlx::query("UPDATE cards SET status = $2, updated_at = now() WHERE id = $1")
            .bind(id.as_str())
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }

    async fn update_card(&self, card: &Card) -> StoreResult<()> {
        let fields = fields_json(card)?;
        let result = sqlx::query("UPDATE cards SET status = $2, fields = $3, updated_at = now() WHERE id = $1")
            .bind(card.id().as_str())
            .bind(card.status().as_str())
            .bind(&fields)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(card.id().clone()));
        }
        Ok(())
    }

    async fn update_positions(&self, positions: &[CardPosition]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        for entry in positions {
            sqlx::query("UPDATE cards SET position = $2, updated_at = now() WHERE id = $1")
                .bind(entry.id.as_str())
                .bind(entry.position)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn delete_card(&self, id: &CardId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
