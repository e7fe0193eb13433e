//! Card model: the draggable unit, its identifier, and its payload fields.
//!
//! The board core only ever reads `id` and `status`. `fields` is carried
//! through untouched apart from the label helpers the edit form uses, and any
//! keys this crate doesn't know about survive a load/save round trip.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;
use crate::consts::{DEFAULT_CARD_LOGO, DEFAULT_CARD_NAME, DEFAULT_CARD_REVENUE};

/// Opaque, stable card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random identifier for a new card.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Editable payload of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Keys this crate doesn't model, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for CardFields {
    fn default() -> Self {
        Self {
            name: DEFAULT_CARD_NAME.to_owned(),
            description: String::new(),
            category: String::new(),
            logo: DEFAULT_CARD_LOGO.to_owned(),
            revenue: DEFAULT_CARD_REVENUE.to_owned(),
            labels: Vec::new(),
            redirect_url: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl CardFields {
    /// Add a label. Surrounding whitespace is trimmed; blank and duplicate
    /// labels are ignored. Returns true if the label list changed.
    pub fn add_label(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.labels.iter().any(|l| l == label) {
            return false;
        }
        self.labels.push(label.to_owned());
        true
    }

    /// Remove every label equal to `label`. Returns true if one was removed.
    pub fn remove_label(&mut self, label: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| l != label);
        self.labels.len() != before
    }
}

/// One card on the board.
///
/// `id` never changes. `status` changes only through the engine, which keeps
/// it a member of the board's column set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    status: ColumnId,
    pub fields: CardFields,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, status: ColumnId, fields: CardFields) -> Self {
        Self { id, status, fields }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn status(&self) -> &ColumnId {
        &self.status
    }

    pub(crate) fn set_status(&mut self, status: ColumnId) {
        self.status = status;
    }
}

/// A card together with its persisted position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCard {
    pub card: Card,
    pub position: i64,
}

/// A card's rank in the global order, as written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPosition {
    pub id: CardId,
    pub position: i64,
}

/// Convert a registry index into a persisted position.
#[must_use]
pub fn position_of(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
