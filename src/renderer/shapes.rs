//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in arena coordinates (y down).

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rgba;

/// Outline width in arena units
pub const LINE_WIDTH: f32 = 1.0;

/// Segments used for circle outlines
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Two triangles covering the box at `origin` with `size`
pub fn quad(origin: Vec2, size: Vec2, color: Rgba, out: &mut Vec<Vertex>) {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Rectangle outline: one band per side, centered on the edge
pub fn rect_outline(origin: Vec2, size: Vec2, color: Rgba, out: &mut Vec<Vertex>) {
    let half = LINE_WIDTH / 2.0;
    let outer = origin - Vec2::splat(half);
    let span = size + Vec2::splat(LINE_WIDTH);

    // Top and bottom run the full outer width
    quad(outer, Vec2::new(span.x, LINE_WIDTH), color, out);
    quad(
        Vec2::new(outer.x, origin.y + size.y - half),
        Vec2::new(span.x, LINE_WIDTH),
        color,
        out,
    );
    // Sides fill in between
    let side_height = (size.y - LINE_WIDTH).max(0.0);
    quad(
        Vec2::new(outer.x, origin.y + half),
        Vec2::new(LINE_WIDTH, side_height),
        color,
        out,
    );
    quad(
        Vec2::new(origin.x + size.x - half, origin.y + half),
        Vec2::new(LINE_WIDTH, side_height),
        color,
        out,
    );
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Rgba,
    segments: u32,
    out: &mut Vec<Vertex>,
) {
    out.reserve((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let dir1 = Vec2::from_angle(theta1);
        let dir2 = Vec2::from_angle(theta2);
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        out.push(Vertex::new(inner1.x, inner1.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(inner2.x, inner2.y, color));

        out.push(Vertex::new(inner2.x, inner2.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(outer2.x, outer2.y, color));
    }
}

/// Circle outline of `radius`, stroked with `LINE_WIDTH`
pub fn circle_outline(center: Vec2, radius: f32, color: Rgba, out: &mut Vec<Vertex>) {
    let half = LINE_WIDTH / 2.0;
    ring(
        center,
        (radius - half).max(0.0),
        radius + half,
        color,
        CIRCLE_SEGMENTS,
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec2::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_quad_covers_box() {
        let mut out = Vec::new();
        quad(Vec2::new(2.0, 3.0), Vec2::new(10.0, 4.0), BLACK, &mut out);
        assert_eq!(out.len(), 6);
        assert_eq!(bounds(&out), (Vec2::new(2.0, 3.0), Vec2::new(12.0, 7.0)));
    }

    #[test]
    fn test_rect_outline_straddles_edges() {
        let mut out = Vec::new();
        rect_outline(Vec2::new(10.0, 10.0), Vec2::splat(10.0), BLACK, &mut out);
        assert_eq!(out.len(), 24);
        assert_eq!(bounds(&out), (Vec2::splat(9.5), Vec2::splat(20.5)));
    }

    #[test]
    fn test_circle_outline_radii() {
        let mut out = Vec::new();
        let center = Vec2::new(50.0, 50.0);
        circle_outline(center, 4.0, BLACK, &mut out);
        assert_eq!(out.len(), (CIRCLE_SEGMENTS * 6) as usize);
        for v in &out {
            let d = Vec2::from(v.position).distance(center);
            assert!((d - 3.5).abs() < 1e-4 || (d - 4.5).abs() < 1e-4, "distance {}", d);
        }
    }

    #[test]
    fn test_small_circle_collapses_inner_radius() {
        // A bullet's half-unit radius leaves no hole
        let mut out = Vec::new();
        circle_outline(Vec2::ZERO, 0.5, BLACK, &mut out);
        assert!(out.iter().any(|v| Vec2::from(v.position) == Vec2::ZERO));
    }
}
