//! Pointer sensor: turns raw pointer events into drag gesture events.
//!
//! A press on a card only becomes a drag once the pointer has travelled more
//! than the activation distance. Releasing before that is a plain click and
//! never reaches the engine.

#[cfg(test)]
#[path = "sensor_test.rs"]
mod sensor_test;

use crate::card::CardId;
use crate::geom::Point;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SensorState {
    #[default]
    Idle,
    /// Pointer is down on a card but hasn't moved far enough yet.
    Pending { card: CardId, origin: Point },
    /// Drag is active.
    Active { card: CardId, origin: Point },
}

/// Gesture events emitted by the sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    None,
    Start(CardId),
    /// Pointer moved during an active drag; `delta` is relative to pointer-down.
    Move { card: CardId, delta: Point },
    End,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct PointerSensor {
    activation_distance: f64,
    state: SensorState,
}

impl PointerSensor {
    #[must_use]
    pub fn new(activation_distance: f64) -> Self {
        Self { activation_distance, state: SensorState::Idle }
    }

    #[must_use]
    pub fn state(&self) -> &SensorState {
        &self.state
    }

    /// Pointer pressed on `card`. Ignored while another press is tracked.
    pub fn pointer_down(&mut self, card: CardId, point: Point) {
        if self.state == SensorState::Idle {
            self.state = SensorState::Pending { card, origin: point };
        }
    }

    pub fn pointer_move(&mut self, point: Point) -> SensorEvent {
        match &self.state {
            SensorState::Idle => SensorEvent::None,
            SensorState::Pending { card, origin } => {
                if point.distance_to(*origin) > self.activation_distance {
                    let (card, origin) = (card.clone(), *origin);
                    self.state = SensorState::Active { card: card.clone(), origin };
                    SensorEvent::Start(card)
                } else {
                    SensorEvent::None
                }
            }
            SensorState::Active { card, origin } => SensorEvent::Move { card: card.clone(), delta: point.delta_from(*origin) },
        }
    }

    pub fn pointer_up(&mut self) -> SensorEvent {
        match std::mem::take(&mut self.state) {
            SensorState::Active { .. } => SensorEvent::End,
            SensorState::Idle | SensorState::Pending { .. } => SensorEvent::None,
        }
    }

    /// Pointer capture lost (window blur, touch cancel, escape).
    pub fn pointer_lost(&mut self) -> SensorEvent {
        match std::mem::take(&mut self.state) {
            SensorState::Active { .. } => SensorEvent::Cancel,
            SensorState::Idle | SensorState::Pending { .. } => SensorEvent::None,
        }
    }
}
