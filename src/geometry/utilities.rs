//! Geometry utility functions
//!
//! Small helpers for writing glyph constructions the way Metafont sources
//! express them: directions given as angles, and points pinned to a height
//! along a known line.

use kurbo::{Point, Vec2};

/// Unit vector pointing at `angle_deg` degrees, counterclockwise from +x.
pub fn dir(angle_deg: f64) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians())
}

/// The point `z` on the line `z0 + t * direction` whose y coordinate is `y`
/// (Metafont's `z - z0 = whatever * direction` with `z.y` fixed).
///
/// Returns `None` for a horizontal `direction`, which never reaches any other
/// height.
pub fn whatever_y(z0: Point, direction: Vec2, y: f64) -> Option<Point> {
    if direction.y == 0.0 {
        return None;
    }
    let t = (y - z0.y) / direction.y;
    Some(Point::new(z0.x + direction.x * t, y))
}
