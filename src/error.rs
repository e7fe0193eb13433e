//! Error taxonomy for the board.
//!
//! DESIGN
//! ======
//! `StoreError` is what a durable store adapter reports. `BoardError` is what
//! the board surfaces to its host; every variant maps to a stable code so the
//! notification layer can render it without matching on display text.
//! None of these are fatal: the host shows a notice and keeps running.

use std::fmt;

use crate::card::CardId;
use crate::column::ColumnId;

// =============================================================================
// STORE
// =============================================================================

/// Failure reported by a [`crate::store::CardStore`] adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("card not found: {0}")]
    NotFound(CardId),
    #[error("duplicate card: {0}")]
    Duplicate(CardId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed card record {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// BOARD
// =============================================================================

/// Which durable write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Status,
    Fields,
    Order,
    Delete,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Status => "status",
            Self::Fields => "fields",
            Self::Order => "order",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("failed to load cards: {0}")]
    LoadFailure(String),
    #[error("{op} write failed for {}: {source}", .id.as_ref().map_or("board", CardId::as_str))]
    WriteFailure {
        op: WriteOp,
        id: Option<CardId>,
        #[source]
        source: StoreError,
    },
    #[error("sign in to add cards")]
    AuthRequired,
    #[error("card not found: {0}")]
    CardNotFound(CardId),
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),
    #[error("a drag of {0} is already in progress")]
    GestureInProgress(CardId),
    #[error("invalid column set: {0}")]
    InvalidColumns(String),
    #[error("config error: {0}")]
    Config(String),
}

impl BoardError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LoadFailure(_) => "E_LOAD_FAILURE",
            Self::WriteFailure { .. } => "E_WRITE_FAILURE",
            Self::AuthRequired => "E_AUTH_REQUIRED",
            Self::CardNotFound(_) => "E_CARD_NOT_FOUND",
            Self::UnknownColumn(_) => "E_UNKNOWN_COLUMN",
            Self::GestureInProgress(_) => "E_GESTURE_IN_PROGRESS",
            Self::InvalidColumns(_) => "E_INVALID_COLUMNS",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
