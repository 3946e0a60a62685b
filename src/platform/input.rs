//! Input events and the commands they map to

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Platform-neutral input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any pointer button pressed
    PointerPress,
    KeyPress(Key),
    WindowCloseRequested,
    /// Drawable area changed size (pixels)
    Resized { width: u32, height: u32 },
    Other,
}

/// Simulation transition requested by an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop the moving block
    Place,
    /// End the run
    Quit,
}

/// Map an input event to a command (most events map to none)
pub fn command_for(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::PointerPress => Some(Command::Place),
        InputEvent::KeyPress(Key::Escape) | InputEvent::WindowCloseRequested => {
            Some(Command::Quit)
        }
        InputEvent::KeyPress(Key::Other) | InputEvent::Resized { .. } | InputEvent::Other => None,
    }
}
