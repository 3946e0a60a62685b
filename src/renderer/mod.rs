//! Rendering module
//!
//! The simulation only ever hands over a list of rectangles; everything
//! GPU-side sits behind [`Renderer`].

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{DrawBatch, Rect, rectangle, scene_rects};
pub use vertex::Vertex;

/// Draws one frame's rectangles, then presents it.
///
/// `draw` is called exactly once per frame before `present`. Presenting may
/// block to pace the frame rate.
pub trait Renderer {
    fn draw(&mut self, rects: &[Rect]);
    fn present(&mut self);

    /// Drawable area changed; the default ignores it
    fn resize(&mut self, _width: u32, _height: u32) {}
}
