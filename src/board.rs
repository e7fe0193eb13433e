//! Board facade, the entry point a UI host talks to.
//!
//! DESIGN
//! ======
//! `Board` wires the synchronous [`EngineCore`] to the asynchronous
//! [`PersistenceBridge`]. Every mutating call runs the engine first, then
//! hands the returned actions to the bridge, so the in-memory registry is
//! already updated by the time any write is spawned. Writes are tracked only
//! so that [`Board::settle`] can wait for them on shutdown or in tests.
//!
//! Creating a card requires a signed-in actor; everything else doesn't.
//! Mutating calls must run inside a Tokio runtime because writes are spawned.

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;

use std::fmt;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::card::{Card, CardId};
use crate::column::ColumnId;
use crate::config::BoardConfig;
use crate::engine::{Action, ColumnView, EngineCore};
use crate::error::BoardError;
use crate::geom::{Point, Rect};
use crate::notify::Notifier;
use crate::persistence::{PersistenceBridge, WriteOutcome};
use crate::resolve::{Candidate, DropTarget, Droppable, rank_closest_corners, resolve};
use crate::sensor::{PointerSensor, SensorEvent};
use crate::store::CardStore;

/// The signed-in user, as handed over by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorId(String);

impl ActorId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct Board {
    core: EngineCore,
    bridge: PersistenceBridge,
    notifier: Notifier,
    sensor: PointerSensor,
    /// Dragged card's rect when the drag activated.
    drag_rect: Option<Rect>,
    actor: Option<ActorId>,
    in_flight: Vec<JoinHandle<WriteOutcome>>,
}

impl Board {
    #[must_use]
    pub fn new(config: &BoardConfig, store: Arc<dyn CardStore>, notifier: Notifier) -> Self {
        Self {
            core: EngineCore::new(config.columns.clone(), config.order_persistence),
            bridge: PersistenceBridge::new(store, notifier.clone()),
            notifier,
            sensor: PointerSensor::new(config.activation_distance),
            drag_rect: None,
            actor: None,
            in_flight: Vec::new(),
        }
    }

    // --- Load ---

    /// Replace the board contents with what the store holds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LoadFailure`] if the store can't be read or holds
    /// cards this board can't show. The board is left empty and a notice is
    /// sent.
    pub async fn load(&mut self) -> Result<usize, BoardError> {
        let records = match self.bridge.store().load_cards().await {
            Ok(records) => records,
            Err(e) => {
                self.core.clear();
                let err = BoardError::LoadFailure(e.to_string());
                error!(error = %e, "board load failed");
                self.notifier.report(&err);
                return Err(err);
            }
        };

        match self.core.load_snapshot(records) {
            Ok(count) => {
                info!(count, "board loaded");
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "board snapshot rejected");
                self.notifier.report(&err);
                Err(err)
            }
        }
    }

    // --- Auth ---

    pub fn sign_in(&mut self, actor: ActorId) {
        info!(%actor, "actor signed in");
        self.actor = Some(actor);
    }

    pub fn sign_out(&mut self) {
        self.actor = None;
    }

    #[must_use]
    pub fn actor(&self) -> Option<&ActorId> {
        self.actor.as_ref()
    }

    // --- Edits ---

    /// Add a card with default fields at the end of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::AuthRequired`] (with a blocking notice) when no
    /// actor is signed in, or [`BoardError::UnknownColumn`].
    pub fn create_card(&mut self, column: &ColumnId) -> Result<CardId, BoardError> {
        if self.actor.is_none() {
            let err = BoardError::AuthRequired;
            warn!(column = %column, "card creation refused without a signed-in actor");
            self.notifier.report(&err);
            return Err(err);
        }
        let (id, actions) = self.core.create_card(column)?;
        self.dispatch(&actions);
        Ok(id)
    }

    /// Remove a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`].
    pub fn delete_card(&mut self, id: &CardId) -> Result<Vec<Action>, BoardError> {
        let result = self.core.delete_card(id);
        self.finish(result)
    }

    /// Apply a full replacement record from the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] or [`BoardError::UnknownColumn`].
    pub fn edit_card(&mut self, card: Card) -> Result<Vec<Action>, BoardError> {
        let result = self.core.edit_card(card);
        self.finish(result)
    }

    /// Move a card to another column from its status picker.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] or [`BoardError::UnknownColumn`].
    pub fn set_status(&mut self, id: &CardId, column: &ColumnId) -> Result<Vec<Action>, BoardError> {
        let result = self.core.set_status(id, column);
        self.finish(result)
    }

    // --- Gesture events ---

    /// # Errors
    ///
    /// Returns [`BoardError::GestureInProgress`] or [`BoardError::CardNotFound`].
    pub fn drag_start(&mut self, id: &CardId) -> Result<Vec<Action>, BoardError> {
        let result = self.core.drag_start(id);
        self.finish(result)
    }

    pub fn drag_over(&mut self, target: &DropTarget) -> Vec<Action> {
        let actions = self.core.drag_over(target);
        self.dispatch(&actions);
        actions
    }

    /// Resolve ranked collision candidates and apply the result.
    pub fn drag_over_ranked(&mut self, ranked: &[Candidate]) -> Vec<Action> {
        let Some(active) = self.core.gesture().active_id().cloned() else {
            return Vec::new();
        };
        let target = resolve(&active, ranked, self.core.registry(), self.core.columns());
        self.drag_over(&target)
    }

    pub fn drag_end(&mut self) -> Vec<Action> {
        self.drag_rect = None;
        let actions = self.core.drag_end();
        self.dispatch(&actions);
        actions
    }

    pub fn drag_cancel(&mut self) -> Vec<Action> {
        self.drag_rect = None;
        let actions = self.core.drag_cancel();
        self.dispatch(&actions);
        actions
    }

    // --- Raw pointer input ---

    pub fn pointer_down(&mut self, card: &CardId, point: Point) {
        self.sensor.pointer_down(card.clone(), point);
    }

    /// Feed a pointer move with the current on-screen layout of every card and
    /// column. Starts the drag once the activation distance is exceeded.
    ///
    /// # Errors
    ///
    /// Returns the drag-start error if activation fails, or
    /// [`BoardError::CardNotFound`] if the pressed card has no rect in
    /// `layout`. Either way the press is dropped.
    pub fn pointer_move(&mut self, point: Point, layout: &[Droppable]) -> Result<Vec<Action>, BoardError> {
        match self.sensor.pointer_move(point) {
            SensorEvent::Start(card) => {
                let Some(rect) = layout.iter().find(|d| d.id == card.as_str()).map(|d| d.rect) else {
                    self.sensor.pointer_lost();
                    self.drag_rect = None;
                    warn!(card_id = %card, "pressed card missing from layout");
                    return Err(BoardError::CardNotFound(card));
                };
                let started = self.drag_start(&card);
                if started.is_ok() {
                    self.drag_rect = Some(rect);
                } else {
                    self.sensor.pointer_lost();
                    self.drag_rect = None;
                }
                started
            }
            SensorEvent::Move { card, delta } => {
                let Some(rect) = self.drag_rect else {
                    return Ok(Vec::new());
                };
                let ranked = rank_closest_corners(&rect.translate(delta), layout, &card);
                Ok(self.drag_over_ranked(&ranked))
            }
            SensorEvent::None | SensorEvent::End | SensorEvent::Cancel => Ok(Vec::new()),
        }
    }

    pub fn pointer_up(&mut self) -> Vec<Action> {
        match self.sensor.pointer_up() {
            SensorEvent::End => self.drag_end(),
            _ => Vec::new(),
        }
    }

    pub fn pointer_lost(&mut self) -> Vec<Action> {
        match self.sensor.pointer_lost() {
            SensorEvent::Cancel => self.drag_cancel(),
            _ => Vec::new(),
        }
    }

    // --- Writes ---

    fn finish(&mut self, result: Result<Vec<Action>, BoardError>) -> Result<Vec<Action>, BoardError> {
        match result {
            Ok(actions) => {
                self.dispatch(&actions);
                Ok(actions)
            }
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "board request rejected");
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, actions: &[Action]) {
        self.in_flight.retain(|handle| !handle.is_finished());
        for action in actions {
            if let Some(handle) = self.bridge.commit(action) {
                self.in_flight.push(handle);
            }
        }
    }

    /// Writes spawned and not yet observed as finished.
    #[must_use]
    pub fn pending_writes(&self) -> usize {
        self.in_flight.len()
    }

    /// Wait for every tracked write and return their outcomes in issue order.
    pub async fn settle(&mut self) -> Vec<WriteOutcome> {
        let handles = std::mem::take(&mut self.in_flight);
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => error!(error = %e, "write task did not complete"),
            }
        }
        outcomes
    }

    // --- Queries ---

    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.core.card(id)
    }

    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.core.active_card()
    }

    #[must_use]
    pub fn column_views(&self) -> Vec<ColumnView<'_>> {
        self.core.column_views()
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
