//! Abstract drawing surface
//!
//! The simulation only ever issues these calls; `renderer::ShapeBatch`
//! turns them into triangles and tests record them.

use glam::Vec2;

/// Straight RGBA color
pub type Rgba = [f32; 4];

/// Colors for game elements
pub mod palette {
    use super::Rgba;

    pub const BACKGROUND: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const OUTLINE: Rgba = [0.0, 0.0, 0.0, 1.0];
    pub const SURVIVOR: Rgba = [1.0, 1.0, 0.0, 1.0];
}

/// Rendering surface in logical playfield coordinates (y down)
pub trait Canvas {
    /// Wipe the previous frame
    fn clear(&mut self);
    /// One unit wide outline of the rectangle at `origin` (top-left)
    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Somewhere to show a short line of text
pub trait TextSink {
    fn show(&mut self, text: &str);
}

impl TextSink for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Everything an entity may need while drawing
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub text: &'a mut dyn TextSink,
    /// Entities alive this frame, the counter included
    pub live_entities: usize,
}
