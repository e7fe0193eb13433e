//! Board configuration parsed from environment variables.

use crate::column::{Column, ColumnSet};
use crate::consts::{DEFAULT_ACTIVATION_DISTANCE_PX, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_NOTIFY_QUEUE_CAPACITY};
use crate::error::BoardError;

/// Whether the global card order is written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPersistence {
    /// Only column assignment is durable; order resets to load order.
    #[default]
    Disabled,
    /// Every card's position is written once when a drag ends.
    OnDrop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub columns: ColumnSet,
    pub order_persistence: OrderPersistence,
    pub activation_distance: f64,
    pub notify_queue_capacity: usize,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: ColumnSet::default(),
            order_persistence: OrderPersistence::default(),
            activation_distance: DEFAULT_ACTIVATION_DISTANCE_PX,
            notify_queue_capacity: DEFAULT_NOTIFY_QUEUE_CAPACITY,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl BoardConfig {
    /// Build typed board config from environment variables.
    ///
    /// Optional:
    /// - `BOARD_COLUMNS`: `id=Title,...` (default `ideas,building,launched`)
    /// - `BOARD_PERSIST_ORDER`: `off` (default) or `on_drop`
    /// - `BOARD_ACTIVATION_DISTANCE_PX`: default 8
    /// - `NOTIFY_QUEUE_CAPACITY`: default 64
    /// - `DATABASE_URL`: in-memory store when absent
    /// - `DB_MAX_CONNECTIONS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] for an unknown `BOARD_PERSIST_ORDER`
    /// value and [`BoardError::InvalidColumns`] for a malformed column list.
    pub fn from_env() -> Result<Self, BoardError> {
        let columns = match std::env::var("BOARD_COLUMNS").ok() {
            Some(raw) => parse_columns(&raw)?,
            None => ColumnSet::default(),
        };
        let order_persistence = parse_order_persistence(std::env::var("BOARD_PERSIST_ORDER").ok().as_deref())?;
        let database_url = std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());

        Ok(Self {
            columns,
            order_persistence,
            activation_distance: env_parse("BOARD_ACTIVATION_DISTANCE_PX", DEFAULT_ACTIVATION_DISTANCE_PX),
            notify_queue_capacity: env_parse("NOTIFY_QUEUE_CAPACITY", DEFAULT_NOTIFY_QUEUE_CAPACITY),
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
        })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_order_persistence(raw: Option<&str>) -> Result<OrderPersistence, BoardError> {
    match raw.map(str::trim).unwrap_or("off") {
        "off" | "false" | "none" | "" => Ok(OrderPersistence::Disabled),
        "on_drop" | "true" => Ok(OrderPersistence::OnDrop),
        other => Err(BoardError::Config(format!(
            "unsupported BOARD_PERSIST_ORDER '{other}' (expected 'off' or 'on_drop')"
        ))),
    }
}

/// Parse `id=Title,id2=Title2`. A bare `id` gets its capitalized id as title.
fn parse_columns(raw: &str) -> Result<ColumnSet, BoardError> {
    let mut columns = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (id, title) = match entry.split_once('=') {
            Some((id, title)) => (id.trim(), title.trim().to_owned()),
            None => (entry, capitalize(entry)),
        };
        if id.is_empty() {
            return Err(BoardError::InvalidColumns(format!("column entry '{entry}' has no id")));
        }
        columns.push(Column::new(id, title));
    }
    ColumnSet::new(columns)
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
