//! Turns a discovered path into an on-screen gesture.
//!
//! For each word the emitter presses at the first cell, moves through every cell of the
//! path in order, releases at the last one, waits for the game to register the word and
//! then presses Escape to dismiss whatever the game showed. Each step blocks, so the next
//! word is not searched for until the previous gesture is fully done.

use std::thread;
use std::time::Duration;

use log::info;

use crate::actuator::{Actuator, ActuatorError, Key};
use crate::gesture::Geometry;
use crate::grid::Cell;
use crate::search::DiscoveryHandler;

/// Pause after releasing the pointer, before the cancel key.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

pub struct ActionEmitter<A> {
    actuator: A,
    geometry: Geometry,
    settle_delay: Duration,
    cancel_key: Key,
}

impl<A: Actuator> ActionEmitter<A> {
    pub fn new(actuator: A, geometry: Geometry) -> Self {
        Self { actuator, geometry, settle_delay: SETTLE_DELAY, cancel_key: Key::Escape }
    }

    #[must_use]
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn into_actuator(self) -> A {
        self.actuator
    }

    /// Trace `path` on screen. An empty path does nothing.
    ///
    /// # Errors
    ///
    /// The first [`ActuatorError`] from the actuator; the remaining steps are skipped.
    pub fn emit(&mut self, path: &[Cell]) -> Result<(), ActuatorError> {
        let gesture = self.geometry.gesture(path);
        let (Some(first), Some(last)) = (gesture.first(), gesture.last()) else {
            return Ok(());
        };

        self.actuator.pointer_down(first)?;
        for &point in gesture.points() {
            self.actuator.pointer_move(point)?;
        }
        self.actuator.pointer_up(last)?;

        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }
        self.actuator.press_key(self.cancel_key)
    }
}

impl<A: Actuator> DiscoveryHandler for ActionEmitter<A> {
    fn on_discovery(&mut self, word: &str, path: &[Cell]) -> Result<(), ActuatorError> {
        info!("Tracing \"{word}\" ({} cells)", path.len());
        self.emit(path)
    }
}
