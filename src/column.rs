//! Columns: the named partitions a card's `status` points into.

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLUMNS;
use crate::error::BoardError;

/// Stable identifier of a column, e.g. `"building"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named drop zone on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable identifier; matched against `Card::status`.
    pub id: ColumnId,
    /// Display label. Not used by any board logic.
    pub title: String,
}

impl Column {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: ColumnId::new(id), title: title.into() }
    }
}

/// The ordered, non-empty list of columns on a board.
///
/// Column ids are unique. The set never changes while a drag is in progress;
/// [`crate::engine::EngineCore::set_columns`] enforces that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Build a column set, rejecting an empty list or a repeated id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidColumns`] when `columns` is empty or two
    /// columns share an id.
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        if columns.is_empty() {
            return Err(BoardError::InvalidColumns("at least one column is required".into()));
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(BoardError::InvalidColumns(format!("duplicate column id: {}", column.id)));
            }
        }
        Ok(Self { columns })
    }

    /// Whether `id` names a column in this set.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.columns.iter().any(|c| c.id.as_str() == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self { columns: DEFAULT_COLUMNS.iter().map(|(id, title)| Column::new(*id, *title)).collect() }
    }
}
