//! Stacko - a tower of shrinking blocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (moving block physics, placement, phases)
//! - `driver`: Per-frame loop ordering (input, integrate, draw, present)
//! - `renderer`: Rectangle batching and the wgpu pipeline
//! - `platform`: Native window, input events and frame timing

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, StepOutcome};
pub use error::StartupError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Height shared by every block (not stored per block)
    pub const BLOCK_HEIGHT: f32 = 0.2;
    /// Placing this many blocks (seed included) wins the run
    pub const TARGET_STACK_LEN: usize = 10;

    /// Horizontal play area bounds
    pub const WALL_LEFT: f32 = -1.0;
    pub const WALL_RIGHT: f32 = 1.0;

    /// Seed block resting at the bottom of the screen
    pub const SEED_CENTER: Vec2 = Vec2::new(0.0, -0.9);
    pub const SEED_HALF_WIDTH: f32 = 0.2;

    /// The first moving block sits one block height above the seed
    pub const MOVING_START_Y: f32 = -1.0 + 3.0 * BLOCK_HEIGHT / 2.0;
    /// Initial horizontal speed (moving right)
    pub const BLOCK_SPEED: f32 = 2.0;

    /// Default window configuration
    pub const WINDOW_TITLE: &str = "Stacko";
    pub const WINDOW_WIDTH: u32 = 500;
    pub const WINDOW_HEIGHT: u32 = 500;
}
