//! Tangent continuity at points marked `smooth`
//!
//! The `smooth` flag is carried through every conversion but the grammar
//! validator does not look at it. This module reports where a smooth point
//! actually has a corner, so callers can warn about it.
//!
//! ```text
//! [previous] → [SMOOTH on-curve] → [next]
//!      ↑               ↑              ↑
//!  incoming       must be on a     outgoing
//!  direction      straight line    direction
//! ```
//!
//! The incoming and outgoing directions must be collinear and point the same
//! way; their lengths do not matter.

use crate::font_source::Contour;
use kurbo::Vec2;

/// Default tolerance, as the sine of the allowed angle between directions
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Indices of on-curve points flagged `smooth` where the outline has a corner.
///
/// Neighbours wrap around on closed contours. The endpoints of an open
/// contour, and points that coincide with a neighbour, are never reported.
pub fn tangent_breaks(contour: &Contour, tolerance: f64) -> Vec<usize> {
    let points = contour.points();
    let len = points.len();
    if len < 3 {
        return Vec::new();
    }
    let open = contour.is_open();

    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.smooth && p.is_on_curve())
        .filter(|&(i, _)| !(open && (i == 0 || i == len - 1)))
        .filter_map(|(i, p)| {
            let prev = points[(i + len - 1) % len].position();
            let next = points[(i + 1) % len].position();
            let incoming = p.position() - prev;
            let outgoing = next - p.position();
            is_corner(incoming, outgoing, tolerance).then_some(i)
        })
        .collect()
}

fn is_corner(incoming: Vec2, outgoing: Vec2, tolerance: f64) -> bool {
    let lengths = incoming.hypot() * outgoing.hypot();
    if lengths == 0.0 {
        return false;
    }
    let sine = incoming.cross(outgoing) / lengths;
    sine.abs() > tolerance || incoming.dot(outgoing) <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::UfoPoint;

    #[test]
    fn collinear_handles_are_smooth() {
        let contour = Contour::new(vec![
            UfoPoint::curve_to(0.0, 0.0).with_smooth(true),
            UfoPoint::off_curve(10.0, 0.0),
            UfoPoint::off_curve(20.0, 10.0),
            UfoPoint::curve_to(20.0, 20.0).with_smooth(true),
            UfoPoint::off_curve(20.0, 40.0),
            UfoPoint::off_curve(-10.0, 0.0),
        ]);
        assert_eq!(tangent_breaks(&contour, DEFAULT_TOLERANCE), Vec::<usize>::new());
    }

    #[test]
    fn corner_on_smooth_point_is_reported() {
        let contour = Contour::new(vec![
            UfoPoint::line_to(0.0, 0.0),
            UfoPoint::line_to(10.0, 0.0).with_smooth(true),
            UfoPoint::line_to(10.0, 10.0),
            UfoPoint::line_to(0.0, 10.0).with_smooth(true),
        ]);
        assert_eq!(tangent_breaks(&contour, DEFAULT_TOLERANCE), vec![1, 3]);
    }

    #[test]
    fn reversal_is_a_corner() {
        assert!(is_corner(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0), DEFAULT_TOLERANCE));
        assert!(!is_corner(Vec2::new(1.0, 0.0), Vec2::new(5.0, 0.0), DEFAULT_TOLERANCE));
    }

    #[test]
    fn open_endpoints_and_unflagged_points_ignored() {
        let contour = Contour::new(vec![
            UfoPoint::move_to(0.0, 0.0).with_smooth(true),
            UfoPoint::line_to(10.0, 0.0),
            UfoPoint::line_to(10.0, 10.0).with_smooth(true),
        ]);
        assert!(tangent_breaks(&contour, DEFAULT_TOLERANCE).is_empty());
    }
}
