//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moving block oscillates, placements are accepted
    #[default]
    Playing,
    /// The stack reached its target height
    Won,
    /// A placement missed the block below
    Lost,
    /// Exit requested by the player or the window
    Quit,
}

impl GamePhase {
    /// Every phase except `Playing` ends the run
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Playing
    }
}

/// A placed block, symmetric about its center. Height is `BLOCK_HEIGHT` for all blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub center: Vec2,
    pub half_width: f32,
}

impl Block {
    pub const fn new(center: Vec2, half_width: f32) -> Self {
        Self { center, half_width }
    }

    /// The block every run starts on
    pub const fn seed() -> Self {
        Self::new(SEED_CENTER, SEED_HALF_WIDTH)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_width
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_width
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::seed()
    }
}

/// The block currently sliding back and forth, waiting to be dropped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingBlock {
    pub block: Block,
    /// Horizontal only; `vel.y` stays 0
    pub vel: Vec2,
}

impl MovingBlock {
    pub fn new(center: Vec2, half_width: f32, speed: f32) -> Self {
        Self {
            block: Block::new(center, half_width),
            vel: Vec2::new(speed, 0.0),
        }
    }
}

impl Default for MovingBlock {
    fn default() -> Self {
        Self::new(
            Vec2::new(0.0, MOVING_START_Y),
            SEED_HALF_WIDTH,
            BLOCK_SPEED,
        )
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Placed blocks, bottom to top. Never empty.
    stack: Vec<Block>,
    /// Block in play
    pub moving: MovingBlock,
    /// Current phase
    pub phase: GamePhase,
}

impl GameState {
    /// Create a fresh run: seed block placed, first block moving right
    pub fn new() -> Self {
        Self::with_moving(MovingBlock::default())
    }

    /// Create a fresh run with a custom moving block
    pub fn with_moving(moving: MovingBlock) -> Self {
        let mut stack = Vec::with_capacity(TARGET_STACK_LEN);
        stack.push(Block::seed());
        Self {
            stack,
            moving,
            phase: GamePhase::Playing,
        }
    }

    /// Placed blocks, bottom to top
    pub fn stack(&self) -> &[Block] {
        &self.stack
    }

    /// Topmost placed block
    pub fn top(&self) -> &Block {
        // The seed is pushed on construction and the stack only grows.
        &self.stack[self.stack.len() - 1]
    }

    /// Append-only; callers in `tick` are the only writers
    pub(crate) fn push(&mut self, block: Block) {
        self.stack.push(block);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
