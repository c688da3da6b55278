//! Pointer and keyboard injection behind a small trait.
//!
//! The search never touches the OS directly. The [`crate::emitter::ActionEmitter`] drives an
//! [`Actuator`], and the binary picks the implementation:
//!
//! - [`XdotoolActuator`] shells out to `xdotool` for real input on X11 desktops.
//! - [`DryRunActuator`] only logs each primitive.
//! - [`RecordingActuator`] keeps every call in memory so tests can assert on exact order.

use std::process::Command;

use log::{debug, info};
use thiserror::Error;

use crate::gesture::Point;

/// Error type for input injection.
#[derive(Debug, Error)]
pub enum ActuatorError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },
}

/// Discrete keys the emitter can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
}

impl Key {
    /// X keysym name, as `xdotool key` expects it.
    #[must_use]
    pub fn keysym(&self) -> &'static str {
        match self {
            Key::Escape => "Escape",
        }
    }
}

/// Synchronous pointer/keyboard primitives.
///
/// Every call blocks until the event has been handed to the OS.
pub trait Actuator {
    /// Move to `at` and press the primary button.
    fn pointer_down(&mut self, at: Point) -> Result<(), ActuatorError>;

    /// Move to `to` with whatever buttons are currently held.
    fn pointer_move(&mut self, to: Point) -> Result<(), ActuatorError>;

    /// Move to `at` and release the primary button.
    fn pointer_up(&mut self, at: Point) -> Result<(), ActuatorError>;

    /// Press and release `key`.
    fn press_key(&mut self, key: Key) -> Result<(), ActuatorError>;
}

/// One recorded call on a [`RecordingActuator`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Key(Key),
}

/// In-memory actuator for tests.
///
/// Set `fail_after` to make the call with that index (0-based) and every later one fail.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    pub events: Vec<ActuatorEvent>,
    pub fail_after: Option<usize>,
}

impl RecordingActuator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, event: ActuatorEvent) -> Result<(), ActuatorError> {
        if self.fail_after.is_some_and(|limit| self.events.len() >= limit) {
            return Err(ActuatorError::Platform("mock failure".into()));
        }
        self.events.push(event);
        Ok(())
    }
}

impl Actuator for RecordingActuator {
    fn pointer_down(&mut self, at: Point) -> Result<(), ActuatorError> {
        self.record(ActuatorEvent::Down(at))
    }

    fn pointer_move(&mut self, to: Point) -> Result<(), ActuatorError> {
        self.record(ActuatorEvent::Move(to))
    }

    fn pointer_up(&mut self, at: Point) -> Result<(), ActuatorError> {
        self.record(ActuatorEvent::Up(at))
    }

    fn press_key(&mut self, key: Key) -> Result<(), ActuatorError> {
        self.record(ActuatorEvent::Key(key))
    }
}

/// Logs gestures instead of performing them.
#[derive(Debug, Default)]
pub struct DryRunActuator;

impl Actuator for DryRunActuator {
    fn pointer_down(&mut self, at: Point) -> Result<(), ActuatorError> {
        info!("pointer down at ({:.0}, {:.0})", at.x, at.y);
        Ok(())
    }

    fn pointer_move(&mut self, to: Point) -> Result<(), ActuatorError> {
        info!("pointer move to ({:.0}, {:.0})", to.x, to.y);
        Ok(())
    }

    fn pointer_up(&mut self, at: Point) -> Result<(), ActuatorError> {
        info!("pointer up at ({:.0}, {:.0})", at.x, at.y);
        Ok(())
    }

    fn press_key(&mut self, key: Key) -> Result<(), ActuatorError> {
        info!("key {}", key.keysym());
        Ok(())
    }
}

/// Drives the real pointer through the `xdotool` command-line tool.
#[derive(Debug, Clone)]
pub struct XdotoolActuator {
    program: String,
}

impl Default for XdotoolActuator {
    fn default() -> Self {
        Self { program: "xdotool".to_string() }
    }
}

impl XdotoolActuator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable (e.g. an absolute path to `xdotool`).
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, args: &[String]) -> Result<(), ActuatorError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!("running `{command}`");
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| ActuatorError::Spawn { program: self.program.clone(), source })?;
        if !status.success() {
            return Err(ActuatorError::CommandFailed { command, status: status.to_string() });
        }
        Ok(())
    }
}

/// `xdotool mousemove` arguments for `p`, rounded to whole pixels.
fn mousemove_args(p: Point) -> [String; 3] {
    ["mousemove".to_string(), format!("{:.0}", p.x.round()), format!("{:.0}", p.y.round())]
}

impl Actuator for XdotoolActuator {
    fn pointer_down(&mut self, at: Point) -> Result<(), ActuatorError> {
        let mut args = mousemove_args(at).to_vec();
        args.extend(["mousedown".to_string(), "1".to_string()]);
        self.run(&args)
    }

    fn pointer_move(&mut self, to: Point) -> Result<(), ActuatorError> {
        self.run(&mousemove_args(to))
    }

    fn pointer_up(&mut self, at: Point) -> Result<(), ActuatorError> {
        let mut args = mousemove_args(at).to_vec();
        args.extend(["mouseup".to_string(), "1".to_string()]);
        self.run(&args)
    }

    fn press_key(&mut self, key: Key) -> Result<(), ActuatorError> {
        self.run(&["key".to_string(), key.keysym().to_string()])
    }
}
