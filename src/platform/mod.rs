//! Platform abstraction layer
//!
//! Handles the boundary with the outside world:
//! - Input events (winit natively, scripted for headless runs)
//! - Frame timing

pub mod input;
pub mod native;
pub mod scripted;
pub mod time;

pub use input::{Command, InputEvent, Key, command_for};
pub use scripted::ScriptedEvents;
pub use time::{FixedClock, FrameClock, SystemClock};

/// Source of pending input events
pub trait EventSource {
    /// Append every event that arrived since the last call. Never blocks.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
}
