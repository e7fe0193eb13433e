//! Card registry: the single ordered list of cards the board renders from.
//!
//! Column stacks are never stored. They are derived on demand by filtering
//! the registry on `status`, so a card's position within its column is always
//! its position in the global order relative to its column-mates.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::card::{Card, CardId, CardPosition, position_of};

/// Ordered collection of cards.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Look up a card by the raw string key a droppable was registered with.
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id().as_str() == key)
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.find(id).is_some()
    }

    /// Index of a card in the global order.
    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Cards in `status`, in registry order (top to bottom of the column).
    #[must_use]
    pub fn filter_by_status(&self, status: &str) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.status().as_str() == status).collect()
    }

    /// Swap in a whole new ordering at once.
    pub fn replace_ordering(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Mutate one card in place. Returns false if the card doesn't exist.
    pub fn update_one(&mut self, id: &CardId, patch: impl FnOnce(&mut Card)) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| c.id() == id) else {
            return false;
        };
        patch(card);
        true
    }

    /// Remove a card by id, returning it if it was present.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.index_of(id)?;
        Some(self.cards.remove(index))
    }

    /// Insert a card at `position`, clamped to the end of the list.
    ///
    /// Returns false and leaves the registry untouched if a card with the
    /// same id is already present.
    pub fn insert(&mut self, card: Card, position: usize) -> bool {
        if self.contains(card.id()) {
            return false;
        }
        let at = position.min(self.cards.len());
        self.cards.insert(at, card);
        true
    }

    /// Append a card at the end of the global order.
    pub fn push(&mut self, card: Card) -> bool {
        let end = self.cards.len();
        self.insert(card, end)
    }

    /// Move the card at `from` so that it ends up at index `to`.
    ///
    /// List move-to-index semantics: the card is removed, then reinserted at
    /// `to`, shifting the cards in between by one. Returns false if either
    /// index is out of range.
    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        if from >= self.cards.len() || to >= self.cards.len() {
            return false;
        }
        if from != to {
            let card = self.cards.remove(from);
            self.cards.insert(to, card);
        }
        true
    }

    /// Ids in global order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id().clone()).collect()
    }

    /// Every card's registry index as a persistable position.
    #[must_use]
    pub fn positions(&self) -> Vec<CardPosition> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| CardPosition { id: c.id().clone(), position: position_of(i) })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
