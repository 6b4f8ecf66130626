//! Point-in-polygon helpers used for collision
//!
//! Screen space is y-down. A quad wound top-left, top-right, bottom-right,
//! bottom-left gives a non-positive area for every edge against an interior
//! point, which is the convention `rectangle_contains` relies on.

use glam::Vec2;

/// Signed area of triangle (a, b, c)
///
/// The sign encodes the orientation of the triple; collinear points give zero.
#[inline]
pub fn signed_triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    ((c.x * b.y - b.x * c.y) - (c.x * a.y - a.x * c.y) + (b.x * a.y - a.x * b.y)) / 2.0
}

/// Does a convex quad (in winding order) contain `point`
///
/// Points on an edge count as inside. The quad does not have to be
/// axis-aligned.
pub fn rectangle_contains(corners: &[Vec2; 4], point: Vec2) -> bool {
    (0..4).all(|i| {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        signed_triangle_area(a, b, point) <= 0.0
    })
}

/// Corners of an axis-aligned box in winding order:
/// top-left, top-right, bottom-right, bottom-left
pub fn box_corners(origin: Vec2, size: Vec2) -> [Vec2; 4] {
    [
        origin,
        Vec2::new(origin.x + size.x, origin.y),
        origin + size,
        Vec2::new(origin.x, origin.y + size.y),
    ]
}

/// Do two quads touch, judged by either one holding a corner of the other
///
/// Exact for boxes that cannot cross each other in a plus shape, such as
/// two squares of equal size.
pub fn quads_touch(a: &[Vec2; 4], b: &[Vec2; 4]) -> bool {
    a.iter().any(|&p| rectangle_contains(b, p)) || b.iter().any(|&p| rectangle_contains(a, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(x: f32, y: f32, size: f32) -> [Vec2; 4] {
        [
            Vec2::new(x, y),
            Vec2::new(x + size, y),
            Vec2::new(x + size, y + size),
            Vec2::new(x, y + size),
        ]
    }

    /// Rectangle of half extents `half` centered at `center`, rotated by `angle`
    fn rotated_rect(center: Vec2, half: Vec2, angle: f32) -> [Vec2; 4] {
        let rot = Vec2::from_angle(angle);
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|corner| center + rot.rotate(corner))
    }

    #[test]
    fn test_area_orientation() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Below the edge in y-down space, i.e. inside a top edge
        assert_eq!(signed_triangle_area(a, b, Vec2::new(5.0, 5.0)), -25.0);
        assert_eq!(signed_triangle_area(a, b, Vec2::new(5.0, -5.0)), 25.0);
        assert_eq!(signed_triangle_area(a, b, Vec2::new(20.0, 0.0)), 0.0);
    }

    #[test]
    fn test_square_contains() {
        let corners = square(100.0, 50.0, 10.0);
        assert!(rectangle_contains(&corners, Vec2::new(105.0, 55.0)));
        assert!(!rectangle_contains(&corners, Vec2::new(95.0, 55.0)));
        assert!(!rectangle_contains(&corners, Vec2::new(105.0, 61.0)));
    }

    #[test]
    fn test_edges_and_corners_are_inside() {
        let corners = square(0.0, 0.0, 10.0);
        assert!(rectangle_contains(&corners, Vec2::new(0.0, 0.0)));
        assert!(rectangle_contains(&corners, Vec2::new(10.0, 10.0)));
        assert!(rectangle_contains(&corners, Vec2::new(5.0, 0.0)));
        assert!(rectangle_contains(&corners, Vec2::new(10.0, 3.0)));
    }

    #[test]
    fn test_box_corners_match_square() {
        assert_eq!(
            box_corners(Vec2::new(100.0, 50.0), Vec2::splat(10.0)),
            square(100.0, 50.0, 10.0)
        );
    }

    #[test]
    fn test_quads_touch() {
        let a = square(0.0, 0.0, 10.0);
        assert!(quads_touch(&a, &square(9.0, 9.0, 10.0)));
        // Sharing only an edge still counts
        assert!(quads_touch(&a, &square(10.0, 3.0, 10.0)));
        assert!(!quads_touch(&a, &square(10.5, 0.0, 10.0)));
        // Containment either way
        assert!(quads_touch(&square(-5.0, -5.0, 30.0), &a));
        assert!(quads_touch(&a, &square(-5.0, -5.0, 30.0)));
    }

    #[test]
    fn test_trapezoid() {
        // Wider at the bottom than at the top
        let corners = [
            Vec2::new(2.0, 0.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(10.0, 6.0),
            Vec2::new(0.0, 6.0),
        ];
        assert!(rectangle_contains(&corners, Vec2::new(5.0, 3.0)));
        // On the slanted right edge and on the bottom edge
        assert!(rectangle_contains(&corners, Vec2::new(9.0, 3.0)));
        assert!(rectangle_contains(&corners, Vec2::new(5.0, 6.0)));
        // Inside the bounding box, outside the slanted left edge
        assert!(!rectangle_contains(&corners, Vec2::new(1.0, 1.0)));
        assert!(!rectangle_contains(&corners, Vec2::new(9.5, 1.0)));
    }

    #[test]
    fn test_rotated_diamond() {
        // Square rotated 45 degrees: the bounding box corners are outside
        let corners = rotated_rect(Vec2::ZERO, Vec2::splat(10.0), std::f32::consts::FRAC_PI_4);
        assert!(rectangle_contains(&corners, Vec2::new(0.0, 13.0)));
        assert!(!rectangle_contains(&corners, Vec2::new(9.5, 9.5)));
    }

    /// Convex quad on an ellipse, one corner per quadrant, wound
    /// top-left, top-right, bottom-right, bottom-left in y-down space
    fn ellipse_quad(center: Vec2, axes: Vec2, jitter: [f32; 4]) -> [Vec2; 4] {
        use std::f32::consts::FRAC_PI_4;
        let bases = [5.0 * FRAC_PI_4, 7.0 * FRAC_PI_4, 9.0 * FRAC_PI_4, 11.0 * FRAC_PI_4];
        let mut corners = [Vec2::ZERO; 4];
        for i in 0..4 {
            let dir = Vec2::from_angle(bases[i] + jitter[i]);
            corners[i] = center + dir * axes;
        }
        corners
    }

    proptest! {
        #[test]
        fn prop_area_antisymmetric(
            ax in -500i32..500, ay in -500i32..500,
            bx in -500i32..500, by in -500i32..500,
            cx in -500i32..500, cy in -500i32..500,
        ) {
            // Integer coordinates keep every product exact in f32
            let a = Vec2::new(ax as f32, ay as f32);
            let b = Vec2::new(bx as f32, by as f32);
            let c = Vec2::new(cx as f32, cy as f32);
            let area = signed_triangle_area(a, b, c);
            prop_assert_eq!(signed_triangle_area(b, a, c), -area);
            prop_assert_eq!(signed_triangle_area(a, c, b), -area);
            prop_assert_eq!(signed_triangle_area(c, b, a), -area);
        }

        #[test]
        fn prop_collinear_is_zero(
            ax in -200i32..200, ay in -200i32..200,
            dx in -10i32..10, dy in -10i32..10,
            s in -10i32..10, t in -10i32..10,
        ) {
            let a = Vec2::new(ax as f32, ay as f32);
            let d = Vec2::new(dx as f32, dy as f32);
            let b = a + d * s as f32;
            let c = a + d * t as f32;
            prop_assert_eq!(signed_triangle_area(a, b, c), 0.0);
        }

        #[test]
        fn prop_interior_points_inside(
            cx in -100.0f32..100.0, cy in -100.0f32..100.0,
            hx in 5.0f32..50.0, hy in 5.0f32..50.0,
            angle in 0.0f32..std::f32::consts::TAU,
            u in 0.05f32..0.95, v in 0.05f32..0.95,
        ) {
            let corners = rotated_rect(Vec2::new(cx, cy), Vec2::new(hx, hy), angle);
            // Bilinear blend of the corners stays strictly inside
            let top = corners[0].lerp(corners[1], u);
            let bottom = corners[3].lerp(corners[2], u);
            let point = top.lerp(bottom, v);
            prop_assert!(rectangle_contains(&corners, point));
        }

        #[test]
        fn prop_convex_quad_blend_inside(
            cx in -20.0f32..20.0, cy in -20.0f32..20.0,
            ax in 10.0f32..40.0, ay in 10.0f32..40.0,
            j0 in -0.5f32..0.5, j1 in -0.5f32..0.5, j2 in -0.5f32..0.5, j3 in -0.5f32..0.5,
            w0 in 0.1f32..1.0, w1 in 0.1f32..1.0, w2 in 0.1f32..1.0, w3 in 0.1f32..1.0,
        ) {
            let corners = ellipse_quad(Vec2::new(cx, cy), Vec2::new(ax, ay), [j0, j1, j2, j3]);
            let weights = [w0, w1, w2, w3];
            let total: f32 = weights.iter().sum();
            let point = corners
                .iter()
                .zip(weights)
                .fold(Vec2::ZERO, |acc, (&corner, w)| acc + corner * (w / total));
            prop_assert!(rectangle_contains(&corners, point));
        }

        #[test]
        fn prop_convex_quad_far_points_outside(
            cx in -20.0f32..20.0, cy in -20.0f32..20.0,
            ax in 10.0f32..40.0, ay in 10.0f32..40.0,
            j0 in -0.5f32..0.5, j1 in -0.5f32..0.5, j2 in -0.5f32..0.5, j3 in -0.5f32..0.5,
            dir in 0.0f32..std::f32::consts::TAU,
            margin in 0.5f32..50.0,
        ) {
            let center = Vec2::new(cx, cy);
            let corners = ellipse_quad(center, Vec2::new(ax, ay), [j0, j1, j2, j3]);
            // Every corner lies within the larger semi-axis of the center
            let point = center + Vec2::from_angle(dir) * (ax.max(ay) + margin);
            prop_assert!(!rectangle_contains(&corners, point));
        }

        #[test]
        fn prop_far_points_outside(
            cx in -100.0f32..100.0, cy in -100.0f32..100.0,
            hx in 5.0f32..50.0, hy in 5.0f32..50.0,
            angle in 0.0f32..std::f32::consts::TAU,
            dir in 0.0f32..std::f32::consts::TAU,
            margin in 0.5f32..100.0,
        ) {
            let center = Vec2::new(cx, cy);
            let corners = rotated_rect(center, Vec2::new(hx, hy), angle);
            // Beyond the circumscribed circle
            let reach = Vec2::new(hx, hy).length() + margin;
            let point = center + Vec2::from_angle(dir) * reach;
            prop_assert!(!rectangle_contains(&corners, point));
        }
    }
}
