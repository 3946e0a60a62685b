//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters through `integrate`'s `elapsed` argument
//! - No rendering or platform dependencies

pub mod overlap;
pub mod state;
pub mod tick;

pub use overlap::Overlap;
pub use state::{Block, GamePhase, GameState, MovingBlock};
pub use tick::{Placement, attempt_placement, integrate, request_quit};
