//! Shared constants for the board crate.

// ── Gesture ─────────────────────────────────────────────────────

/// Pointer travel in pixels before a press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE_PX: f64 = 8.0;

// ── New card defaults ───────────────────────────────────────────

/// Name given to a freshly created card.
pub const DEFAULT_CARD_NAME: &str = "New product";

/// Logo given to a freshly created card.
pub const DEFAULT_CARD_LOGO: &str = "🚀";

/// Revenue label given to a freshly created card.
pub const DEFAULT_CARD_REVENUE: &str = "$0/mo";

// ── Columns ─────────────────────────────────────────────────────

/// `(id, title)` pairs of the default column set, left to right.
pub const DEFAULT_COLUMNS: [(&str, &str); 3] = [("ideas", "Ideas"), ("building", "Building"), ("launched", "Launched")];

// ── Runtime ─────────────────────────────────────────────────────

/// Bounded capacity of the notification queue.
pub const DEFAULT_NOTIFY_QUEUE_CAPACITY: usize = 64;

/// Postgres pool size when `DB_MAX_CONNECTIONS` is unset.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
