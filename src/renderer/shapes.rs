//! Rectangle batching
//!
//! Blocks reach the GPU as axis-aligned rectangles given by two opposite
//! corners in [-1, 1] space, expanded here into triangle lists.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::BLOCK_HEIGHT;
use crate::sim::{Block, GameState};

/// Axis-aligned rectangle handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
    pub color: [f32; 4],
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2, color: [f32; 4]) -> Self {
        Self { min, max, color }
    }

    /// Footprint of a block with the shared block height
    pub fn from_block(block: &Block, color: [f32; 4]) -> Self {
        let half_extent = Vec2::new(block.half_width, BLOCK_HEIGHT / 2.0);
        Self::new(block.center - half_extent, block.center + half_extent, color)
    }
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rectangle(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Accumulates rectangles into one vertex list per frame
#[derive(Debug, Default)]
pub struct DrawBatch {
    vertices: Vec<Vertex>,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rectangle(&mut self, rect: &Rect) {
        self.vertices
            .extend_from_slice(&rectangle(rect.min, rect.max, rect.color));
    }

    pub fn extend(&mut self, rects: &[Rect]) {
        self.vertices.reserve(rects.len() * 6);
        for rect in rects {
            self.add_rectangle(rect);
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Keeps the allocation for the next frame
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

/// Rectangles for the current frame: stack bottom to top, then the moving block
pub fn scene_rects(state: &GameState, out: &mut Vec<Rect>) {
    out.clear();
    out.extend(
        state
            .stack()
            .iter()
            .map(|block| Rect::from_block(block, colors::BLOCK)),
    );
    out.push(Rect::from_block(&state.moving.block, colors::BLOCK));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::attempt_placement;

    #[test]
    fn test_rect_from_seed_block() {
        let rect = Rect::from_block(&Block::seed(), colors::BLOCK);
        assert!((rect.min.x - (-0.2)).abs() < 1e-6);
        assert!((rect.max.x - 0.2).abs() < 1e-6);
        assert!((rect.min.y - (-1.0)).abs() < 1e-6);
        assert!((rect.max.y - (-0.8)).abs() < 1e-6);
        assert_eq!(rect.color, [1.0; 4]);
    }

    #[test]
    fn test_rectangle_covers_corners() {
        let verts = rectangle(Vec2::new(-0.5, -0.25), Vec2::new(0.5, 0.25), colors::BLOCK);
        for corner in [[-0.5, -0.25], [0.5, -0.25], [0.5, 0.25], [-0.5, 0.25]] {
            assert!(verts.iter().any(|v| v.position == corner));
        }
    }

    #[test]
    fn test_batch_accumulates_and_clears() {
        let mut batch = DrawBatch::new();
        let rect = Rect::from_block(&Block::seed(), colors::BLOCK);
        batch.extend(&[rect, rect]);
        assert_eq!(batch.vertices().len(), 12);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_scene_rects_order() {
        let mut state = GameState::new();
        state.moving.block.center.x = 0.1;
        attempt_placement(&mut state);

        let mut rects = Vec::new();
        scene_rects(&state, &mut rects);

        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], Rect::from_block(&state.stack()[0], colors::BLOCK));
        assert_eq!(rects[1], Rect::from_block(&state.stack()[1], colors::BLOCK));
        assert_eq!(rects[2], Rect::from_block(&state.moving.block, colors::BLOCK));
    }
}
