//! Drop target resolution.
//!
//! Two pure steps. [`rank_closest_corners`] turns screen geometry into an
//! ordered candidate list; [`resolve`] classifies the best candidate against
//! the live registry and column set. Droppable ids are opaque strings: a card
//! and a column are told apart only by which collection knows the id.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use crate::card::CardId;
use crate::column::{ColumnId, ColumnSet};
use crate::geom::Rect;
use crate::registry::CardRegistry;

/// What the dragged card is currently over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DropTarget {
    /// Nothing, or the dragged card itself.
    #[default]
    None,
    /// Another card.
    OverCard(CardId),
    /// A column's empty area.
    OverColumn(ColumnId),
}

/// A registered drop zone and where it sits on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Droppable {
    pub id: String,
    pub rect: Rect,
}

impl Droppable {
    #[must_use]
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// One ranked collision candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    /// Mean corner distance to the dragged rect; smaller is closer.
    pub distance: f64,
}

/// Rank droppables by closest-corner distance to `collision`.
///
/// The dragged card's own droppable is skipped. The sort is stable, so equal
/// distances keep registration order.
#[must_use]
pub fn rank_closest_corners(collision: &Rect, droppables: &[Droppable], active: &CardId) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = droppables
        .iter()
        .filter(|d| d.id != active.as_str())
        .map(|d| Candidate { id: d.id.clone(), distance: collision.corner_distance(&d.rect) })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

/// Classify one droppable id for the card being dragged.
#[must_use]
pub fn classify(active: &CardId, candidate: &str, registry: &CardRegistry, columns: &ColumnSet) -> DropTarget {
    if candidate == active.as_str() {
        return DropTarget::None;
    }
    if let Some(card) = registry.find_key(candidate) {
        return DropTarget::OverCard(card.id().clone());
    }
    if let Some(column) = columns.get(candidate) {
        return DropTarget::OverColumn(column.id.clone());
    }
    DropTarget::None
}

/// Classify the top-ranked candidate, or `None` when there is none.
#[must_use]
pub fn resolve(active: &CardId, ranked: &[Candidate], registry: &CardRegistry, columns: &ColumnSet) -> DropTarget {
    ranked
        .first()
        .map_or(DropTarget::None, |top| classify(active, &top.id, registry, columns))
}
