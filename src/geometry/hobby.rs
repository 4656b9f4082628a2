//! Hobby's control-point formula for a single cubic segment
//!
//! Given the two nodes of a segment, the tangent direction at each node and a
//! tension, this computes the two interior control points. Tangents must be
//! supplied explicitly; there is no tangent inference across a path.
//!
//! Reference: John D. Hobby, "Smooth, Easy to Compute Interpolating Splines",
//! 1985, CS-TR-85-1047, equations (2), (3) and (10).

use kurbo::{Point, Vec2};

/// Smallest tension Metafont accepts. Larger values pull the curve towards
/// its tangent lines; infinity gives straight tangent legs.
pub const MIN_TENSION: f64 = 0.75;

// Metafont's constants from the paragraph after equation (10).
const A: f64 = std::f64::consts::SQRT_2;
const B: f64 = 1.0 / 16.0;
/// (3 - sqrt(5)) / 2
const C: f64 = 0.381_966_011_250_105_1;

/// Compute the interior control points of the segment from `z1` to `z2`.
///
/// `w1` is the direction leaving `z1` (pointing into the curve) and `w2` is
/// the direction arriving at `z2` (pointing out of the curve). Only their
/// direction matters; both must be non-zero. The same `tension` is used on
/// both sides of the segment.
pub fn control_points(z1: Point, z2: Point, w1: Vec2, w2: Vec2, tension: f64) -> (Point, Point) {
    control_points_with_tensions(z1, z2, w1, w2, tension, tension)
}

/// Hobby's general form with an independent tension on each side.
pub fn control_points_with_tensions(
    z1: Point,
    z2: Point,
    w1: Vec2,
    w2: Vec2,
    tau1: f64,
    tau2: f64,
) -> (Point, Point) {
    let chord = z2 - z1;

    // Swapping either difference flips the side the curve bulges to.
    let theta = w1.atan2() - chord.atan2();
    let phi = chord.atan2() - w2.atan2();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let alpha =
        A * (sin_theta - B * sin_phi) * (sin_phi - B * sin_theta) * (cos_theta - cos_phi);
    let rho = (2.0 + alpha) / (1.0 + (1.0 - C) * cos_theta + C * cos_phi);
    let sigma = (2.0 - alpha) / (1.0 + (1.0 - C) * cos_phi + C * cos_theta);

    // Control points for the unit segment (0,0)-(1,0).
    let u1 = Vec2::new(cos_theta, sin_theta) * (rho / (3.0 * tau1));
    let u2 = Vec2::new(
        1.0 - sigma / (3.0 * tau2) * cos_phi,
        sigma / (3.0 * tau2) * sin_phi,
    );

    (z1 + along_chord(chord, u1), z1 + along_chord(chord, u2))
}

/// Map a vector from the unit frame onto the frame spanned by `chord`
/// (rotation plus uniform scale, equation (2)).
fn along_chord(chord: Vec2, v: Vec2) -> Vec2 {
    Vec2::new(
        chord.x * v.x - chord.y * v.y,
        chord.y * v.x + chord.x * v.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual - expected).hypot() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn straight_segment_gives_thirds() {
        let (c1, c2) = control_points(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            1.0,
        );
        assert!((c1.x - 1.0 / 3.0).abs() < EPS && c1.y.abs() < EPS);
        assert!((c2.x - 2.0 / 3.0).abs() < EPS && c2.y.abs() < EPS);
    }

    #[test]
    fn tangent_length_is_ignored() {
        let z1 = Point::new(10.0, 20.0);
        let z2 = Point::new(110.0, 60.0);
        let unit = control_points(z1, z2, Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), 1.2);
        let long = control_points(z1, z2, Vec2::new(0.0, 7.5), Vec2::new(40.0, 0.0), 1.2);
        assert_close(unit.0, long.0);
        assert_close(unit.1, long.1);
    }

    #[test]
    fn affine_equivariance() {
        let w1 = Vec2::new(0.3, 1.0);
        let w2 = Vec2::new(1.0, -0.4);
        let z1 = Point::new(1.0, 2.0);
        let z2 = Point::new(4.0, 3.0);
        let scale = 7.0;
        let offset = Vec2::new(-12.0, 30.5);

        for tension in [0.75, 1.0, 1.5, 4.0] {
            let (c1, c2) = control_points(z1, z2, w1, w2, tension);
            let (d1, d2) = control_points(
                (z1.to_vec2() * scale + offset).to_point(),
                (z2.to_vec2() * scale + offset).to_point(),
                w1,
                w2,
                tension,
            );
            assert_close(d1, (c1.to_vec2() * scale + offset).to_point());
            assert_close(d2, (c2.to_vec2() * scale + offset).to_point());
        }
    }

    #[test]
    fn quarter_circle_bulges_outward() {
        // Leaving upwards from (1,0), arriving leftwards at (0,1).
        let (c1, c2) = control_points(
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            1.0,
        );
        assert!((c1.x - 1.0).abs() < EPS);
        assert!(c1.y > 0.4 && c1.y < 0.7, "c1 = {c1:?}");
        assert!((c2.y - 1.0).abs() < EPS);
        assert!(c2.x > 0.4 && c2.x < 0.7, "c2 = {c2:?}");
        // Symmetric about the diagonal.
        assert!((c1.y - c2.x).abs() < EPS);
    }

    #[test]
    fn higher_tension_shortens_handles() {
        let z1 = Point::new(0.0, 0.0);
        let z2 = Point::new(100.0, 0.0);
        let w1 = Vec2::new(1.0, 1.0);
        let w2 = Vec2::new(1.0, -1.0);
        let (loose, _) = control_points(z1, z2, w1, w2, MIN_TENSION);
        let (taut, _) = control_points(z1, z2, w1, w2, 3.0);
        assert!((taut - z1).hypot() < (loose - z1).hypot());
    }

    #[test]
    fn independent_tensions_only_affect_their_side() {
        let z1 = Point::new(0.0, 0.0);
        let z2 = Point::new(50.0, 20.0);
        let w1 = Vec2::new(0.0, 1.0);
        let w2 = Vec2::new(0.0, -1.0);
        let (a1, a2) = control_points_with_tensions(z1, z2, w1, w2, 1.0, 1.0);
        let (b1, b2) = control_points_with_tensions(z1, z2, w1, w2, 1.0, 2.0);
        assert_close(a1, b1);
        assert!((b2 - z2).hypot() < (a2 - z2).hypot());
    }
}
