//! Gesture state for a single drag, from start to end or cancel.
//!
//! Owned by [`crate::engine::EngineCore`] and never persisted.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::card::CardId;
use crate::resolve::DropTarget;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging {
        /// The card under the pointer.
        active: CardId,
        /// Target of the most recent move event that was applied.
        last_target: Option<DropTarget>,
        /// Global order when the drag started, for order persistence on drop.
        origin_order: Vec<CardId>,
    },
}

impl Gesture {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Id of the dragged card, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&CardId> {
        match self {
            Self::Idle => None,
            Self::Dragging { active, .. } => Some(active),
        }
    }
}
