//! Outline model errors

use crate::font_source::UfoPointType;

/// A glyph outline or contour that breaks a model invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum OutlineError {
    /// The glyph name is empty.
    #[error("glyph name must not be empty")]
    EmptyName,
    /// The advance width is NaN or infinite.
    #[error("advance width must be a finite number, got {0}")]
    NonFiniteAdvance(f64),
    /// The unicode value is not the hex form of a Unicode scalar value.
    #[error("`{0}` is not a hexadecimal Unicode scalar value")]
    BadUnicode(String),
    /// A point coordinate is NaN or infinite.
    #[error("contour {contour}, point {point}: coordinates must be finite numbers")]
    NonFiniteCoordinate { contour: usize, point: usize },
    /// A contour without any points.
    #[error("contour {contour} has no points")]
    EmptyContour { contour: usize },
    /// The point type sequence of a contour is not a valid outline.
    ///
    /// `point` is the position in traversal order; the virtual revisit of the
    /// first point that closes a closed contour is reported as the contour's
    /// length.
    #[error("contour {contour}, point {point}: {violation}")]
    Grammar {
        contour: usize,
        point: usize,
        violation: GrammarViolation,
    },
    /// A curve segment was requested between knots without the tangent it needs.
    #[error("segment {segment} is a curve but its knots do not give both directions")]
    MissingTangent { segment: usize },
    /// The knot and segment lists of a path do not line up.
    #[error("{knots} knots need {} segments, got {segments}", .knots.saturating_sub(1))]
    SegmentCount { knots: usize, segments: usize },
}

/// The transition of the contour grammar that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GrammarViolation {
    #[error("a contour must not start with an offcurve point")]
    StartsWithOffCurve,
    #[error("line must follow line or curve")]
    LineAfterOffCurve,
    #[error("curve must follow second offcurve")]
    CurveWithoutOffCurves,
    #[error("three offcurve points in a row are not allowed")]
    ThreeOffCurves,
    #[error("move cannot occur after the first point")]
    MoveAfterFirst,
    #[error("open contour must end with line or curve, not {0}")]
    OpenContourEnd(UfoPointType),
}
