//! Horizontal overlap between two blocks
//!
//! The whole game hinges on this interval: it decides whether a drop lands
//! and how wide the next block will be.

use super::state::Block;

/// Intersection of two blocks' horizontal extents.
///
/// `left > right` when the blocks are apart; `len()` is then negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub left: f32,
    pub right: f32,
}

impl Overlap {
    /// Overlap of `upper` resting on `lower`
    pub fn between(lower: &Block, upper: &Block) -> Self {
        Self {
            left: lower.left().max(upper.left()),
            right: lower.right().min(upper.right()),
        }
    }

    /// Signed overlap length (`min(rights) - max(lefts)`)
    #[inline]
    pub fn len(&self) -> f32 {
        self.right - self.left
    }

    /// Strictly positive; touching edges do not count
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.len() > 0.0
    }

    #[inline]
    pub fn center(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.len() / 2.0
    }
}
