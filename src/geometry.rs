//! Axis-aligned rectangle helpers used by movement and collision.
//!
//! Actors never resolve both axes at once: they move on X and call
//! [`resolve_against`] with [`Axis::Horizontal`], then move on Y and call it
//! again with [`Axis::Vertical`]. Resolving both axes together snags actors
//! on obstacle corners when moving diagonally.
//!
//! All rectangles are raylib [`Rectangle`]s with the top-left corner in
//! `x`/`y` and non-negative `width`/`height`.

use raylib::prelude::{Rectangle, Vector2};

/// Axis along which a push-out is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Strict AABB overlap. Rectangles that only share an edge do not overlap.
pub fn intersects(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Push `moving` out of `obstacle` along a single axis.
///
/// `sign` is the sign of the moving entity's direction on that axis. A
/// positive sign snaps the right (or bottom) edge of `moving` onto the left
/// (or top) edge of `obstacle`; a negative sign snaps the left (or top) edge
/// onto the obstacle's right (or bottom) edge. A zero sign, or rectangles that
/// do not overlap, leave `moving` untouched.
pub fn resolve_axis(moving: &mut Rectangle, obstacle: &Rectangle, axis: Axis, sign: f32) {
    if !intersects(moving, obstacle) {
        return;
    }
    match axis {
        Axis::Horizontal => {
            if sign > 0.0 {
                moving.x = obstacle.x - moving.width;
            } else if sign < 0.0 {
                moving.x = obstacle.x + obstacle.width;
            }
        }
        Axis::Vertical => {
            if sign > 0.0 {
                moving.y = obstacle.y - moving.height;
            } else if sign < 0.0 {
                moving.y = obstacle.y + obstacle.height;
            }
        }
    }
}

/// Apply [`resolve_axis`] against every obstacle, in slice order.
pub fn resolve_against(moving: &mut Rectangle, obstacles: &[Rectangle], axis: Axis, sign: f32) {
    if sign == 0.0 {
        return;
    }
    for obstacle in obstacles {
        resolve_axis(moving, obstacle, axis, sign);
    }
}

/// Normalize `v`, or return the zero vector when its length is zero or not finite.
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let length = (v.x * v.x + v.y * v.y).sqrt();
    if length > 0.0 && length.is_finite() {
        Vector2 {
            x: v.x / length,
            y: v.y / length,
        }
    } else {
        Vector2 { x: 0.0, y: 0.0 }
    }
}

/// Center point of a rectangle.
pub fn center(rect: &Rectangle) -> Vector2 {
    Vector2 {
        x: rect.x + rect.width * 0.5,
        y: rect.y + rect.height * 0.5,
    }
}

/// Rectangle of the given size centered on `center`.
pub fn rect_centered(center: Vector2, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x: center.x - width * 0.5,
        y: center.y - height * 0.5,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle {
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_intersects_overlap() {
        assert!(intersects(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_intersects_touching_edges_do_not_overlap() {
        assert!(!intersects(&rect(0.0, 0.0, 10.0, 10.0), &rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!intersects(&rect(0.0, 0.0, 10.0, 10.0), &rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_intersects_disjoint() {
        assert!(!intersects(&rect(0.0, 0.0, 10.0, 10.0), &rect(50.0, 50.0, 1.0, 1.0)));
    }

    #[test]
    fn test_resolve_horizontal_positive_snaps_right_edge() {
        let obstacle = rect(100.0, 0.0, 50.0, 50.0);
        let mut moving = rect(95.0, 10.0, 20.0, 20.0);
        resolve_axis(&mut moving, &obstacle, Axis::Horizontal, 1.0);
        assert_eq!(moving.x + moving.width, obstacle.x);
        assert_eq!(moving.y, 10.0);
    }

    #[test]
    fn test_resolve_horizontal_negative_snaps_left_edge() {
        let obstacle = rect(100.0, 0.0, 50.0, 50.0);
        let mut moving = rect(140.0, 10.0, 20.0, 20.0);
        resolve_axis(&mut moving, &obstacle, Axis::Horizontal, -1.0);
        assert_eq!(moving.x, 150.0);
        assert_eq!(moving.y, 10.0);
    }

    #[test]
    fn test_resolve_vertical_both_signs() {
        let obstacle = rect(0.0, 100.0, 50.0, 50.0);
        let mut falling = rect(10.0, 90.0, 20.0, 20.0);
        resolve_axis(&mut falling, &obstacle, Axis::Vertical, 1.0);
        assert_eq!(falling.y + falling.height, 100.0);

        let mut rising = rect(10.0, 140.0, 20.0, 20.0);
        resolve_axis(&mut rising, &obstacle, Axis::Vertical, -1.0);
        assert_eq!(rising.y, 150.0);
        assert_eq!(rising.x, 10.0);
    }

    #[test]
    fn test_resolve_zero_sign_is_noop() {
        let obstacle = rect(0.0, 0.0, 50.0, 50.0);
        let mut moving = rect(10.0, 10.0, 20.0, 20.0);
        resolve_axis(&mut moving, &obstacle, Axis::Horizontal, 0.0);
        resolve_axis(&mut moving, &obstacle, Axis::Vertical, 0.0);
        assert_eq!((moving.x, moving.y), (10.0, 10.0));
    }

    #[test]
    fn test_resolve_without_overlap_is_noop() {
        let obstacle = rect(100.0, 100.0, 10.0, 10.0);
        let mut moving = rect(0.0, 0.0, 10.0, 10.0);
        resolve_axis(&mut moving, &obstacle, Axis::Horizontal, 1.0);
        assert_eq!(moving.x, 0.0);
    }

    #[test]
    fn test_resolve_against_multiple_obstacles() {
        let wall = [rect(100.0, 0.0, 10.0, 30.0), rect(100.0, 30.0, 10.0, 30.0)];
        let mut moving = rect(95.0, 20.0, 10.0, 20.0);
        resolve_against(&mut moving, &wall, Axis::Horizontal, 1.0);
        assert_eq!(moving.x, 90.0);
    }

    #[test]
    fn test_normalize_or_zero_zero_vector() {
        let n = normalize_or_zero(Vector2 { x: 0.0, y: 0.0 });
        assert_eq!((n.x, n.y), (0.0, 0.0));
    }

    #[test]
    fn test_normalize_or_zero_non_finite() {
        let n = normalize_or_zero(Vector2 {
            x: f32::NAN,
            y: 1.0,
        });
        assert_eq!((n.x, n.y), (0.0, 0.0));
    }

    #[test]
    fn test_normalize_or_zero_unit_length() {
        let n = normalize_or_zero(Vector2 { x: 3.0, y: 4.0 });
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_center_and_rect_centered_agree() {
        let r = rect_centered(Vector2 { x: 50.0, y: 20.0 }, 10.0, 4.0);
        assert_eq!((r.x, r.y), (45.0, 18.0));
        let c = center(&r);
        assert_eq!((c.x, c.y), (50.0, 20.0));
    }
}
