//! Frame-sized vertex batch that entities draw into

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Canvas, Rgba};

/// Collects one frame of triangles in arena coordinates
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for ShapeBatch {
    /// The render pass clears to the background, so only the batch resets here
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        shapes::rect_outline(origin, size, color, &mut self.vertices);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        shapes::quad(origin, size, color, &mut self.vertices);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        shapes::circle_outline(center, radius, color, &mut self.vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::palette;

    #[test]
    fn test_primitives_append() {
        let mut batch = ShapeBatch::new();
        batch.fill_rect(Vec2::ZERO, Vec2::splat(10.0), palette::SURVIVOR);
        assert_eq!(batch.vertices().len(), 6);
        batch.stroke_rect(Vec2::ZERO, Vec2::splat(10.0), palette::OUTLINE);
        assert_eq!(batch.vertices().len(), 30);
        batch.stroke_circle(Vec2::ZERO, 0.5, palette::OUTLINE);
        assert_eq!(batch.vertices().len(), 30 + (shapes::CIRCLE_SEGMENTS * 6) as usize);

        // Fill comes first so the outline lands on top
        assert_eq!(batch.vertices()[0].color, palette::SURVIVOR);
        assert_eq!(batch.vertices()[6].color, palette::OUTLINE);
    }

    #[test]
    fn test_clear_empties_batch() {
        let mut batch = ShapeBatch::new();
        batch.stroke_rect(Vec2::ZERO, Vec2::splat(10.0), palette::OUTLINE);
        batch.clear();
        assert!(batch.vertices().is_empty());
    }
}
