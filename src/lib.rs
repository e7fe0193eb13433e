//! Drag-and-drop kanban board core.
//!
//! Cards live in one flat, ordered registry and are partitioned into columns
//! by their `status`. A pointer gesture moves a card around that registry and
//! across columns; every accepted change is applied in memory first and then
//! mirrored to a durable store in the background, without rollback.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`card`] | Card record, identifiers, and pass-through fields |
//! | [`column`] | Column identifiers and the fixed column set |
//! | [`registry`] | Ordered card registry and derived per-column views |
//! | [`geom`] | Points, rectangles, and closest-corner distance |
//! | [`resolve`] | Drop target ranking and classification |
//! | [`gesture`] | The `Idle` / `Dragging` gesture state |
//! | [`sensor`] | Pointer sensor with an activation distance |
//! | [`engine`] | Reorder/reassign state machine and its [`engine::Action`]s |
//! | [`persistence`] | Fire-and-forget bridge from actions to the store |
//! | [`store`] | `CardStore` port with in-memory and Postgres adapters |
//! | [`db`] | Postgres pool setup and migrations |
//! | [`notify`] | User-visible notification channel |
//! | [`board`] | Host facade: engine + bridge + auth gate |
//! | [`config`] | Environment configuration |
//! | [`error`] | Error taxonomy |
//! | [`seed`] | Sample board contents |
//! | [`command`] | Line commands understood by the binary |

pub mod board;
pub mod card;
pub mod column;
pub mod command;
pub mod config;
pub mod consts;
pub mod db;
pub mod engine;
pub mod error;
pub mod geom;
pub mod gesture;
pub mod notify;
pub mod persistence;
pub mod registry;
pub mod resolve;
pub mod seed;
pub mod sensor;
pub mod store;

pub use board::{ActorId, Board};
pub use card::{Card, CardFields, CardId, CardPosition, StoredCard};
pub use column::{Column, ColumnId, ColumnSet};
pub use config::{BoardConfig, OrderPersistence};
pub use engine::{Action, EngineCore};
pub use error::{BoardError, StoreError};
pub use resolve::DropTarget;
