//! Contour construction from Metafont-style paths
//!
//! A path is written as nodes joined by segments. A segment is either a
//! straight line or a curve with a tension; for a curve the direction leaving
//! the start node and the direction arriving at the end node must both be
//! known, and [`hobby::control_points`] turns them into the two offcurve
//! points.
//!
//! ```text
//! z1{left} .. tension 1 .. {down}z2 -- z3
//! ```
//!
//! [`SplinePen`] draws such a path step by step; [`Knot`] and [`Segment`]
//! describe the same thing as data.

use crate::font_source::{Contour, OutlineError, UfoPoint, UfoPointType};
use crate::geometry::hobby;
use kurbo::{Point, Vec2};

/// Incrementally builds one contour, starting with a `move` point.
#[derive(Debug, Clone)]
pub struct SplinePen {
    points: Vec<UfoPoint>,
}

impl SplinePen {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![UfoPoint::move_to(start.x, start.y)],
        }
    }

    /// Current end of the path
    pub fn current(&self) -> Point {
        // The point list is never empty: `new` pushes the start point.
        self.points
            .last()
            .map(UfoPoint::position)
            .unwrap_or(Point::ZERO)
    }

    /// Straight segment to `to`.
    pub fn line_to(mut self, to: Point) -> Self {
        self.points.push(UfoPoint::line_to(to.x, to.y));
        self
    }

    /// Curve to `to`, leaving the current point along `leaving` and arriving
    /// along `arriving`.
    pub fn curve_to(mut self, leaving: Vec2, tension: f64, arriving: Vec2, to: Point) -> Self {
        let (c1, c2) = hobby::control_points(self.current(), to, leaving, arriving, tension);
        self.points.extend([
            UfoPoint::off_curve(c1.x, c1.y),
            UfoPoint::off_curve(c2.x, c2.y),
            UfoPoint::curve_to(to.x, to.y),
        ]);
        self
    }

    /// Finish as an open contour.
    pub fn finish(self) -> Result<Contour, OutlineError> {
        let contour = Contour::new(self.points);
        contour.validate()?;
        Ok(contour)
    }

    /// Finish as a closed contour.
    ///
    /// If the path has returned to its start, the duplicate end point is
    /// dropped and the start takes over its type. Otherwise an implicit
    /// closing line is added.
    pub fn close(mut self) -> Result<Contour, OutlineError> {
        let start = self.points[0].position();
        let closing_type = match self.points.last() {
            Some(last) if self.points.len() > 1 && last.position() == start => {
                let point_type = last.point_type;
                self.points.pop();
                point_type
            }
            _ => UfoPointType::Line,
        };
        self.points[0].point_type = closing_type;
        let contour = Contour::new(self.points);
        contour.validate()?;
        Ok(contour)
    }
}

/// A path node with the directions of the curves meeting there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub point: Point,
    /// Direction of travel when arriving at this knot
    pub incoming: Option<Vec2>,
    /// Direction of travel when leaving this knot
    pub outgoing: Option<Vec2>,
}

impl Knot {
    /// A knot without tangent information; only lines may touch it.
    pub fn new(point: impl Into<Point>) -> Self {
        Self {
            point: point.into(),
            incoming: None,
            outgoing: None,
        }
    }

    /// Same direction on both sides.
    pub fn with_dir(self, direction: Vec2) -> Self {
        Self {
            incoming: Some(direction),
            outgoing: Some(direction),
            ..self
        }
    }

    /// Different directions on each side (a cusp or a corner).
    pub fn with_dirs(self, incoming: Vec2, outgoing: Vec2) -> Self {
        Self {
            incoming: Some(incoming),
            outgoing: Some(outgoing),
            ..self
        }
    }
}

/// How two consecutive knots are joined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line,
    Curve(f64),
}

/// Build an open contour through `knots`, joining knot `i` and `i + 1` with
/// `segments[i]`.
pub fn open_path(knots: &[Knot], segments: &[Segment]) -> Result<Contour, OutlineError> {
    draw(knots, segments)?.finish()
}

/// Like [`open_path`], but closes the contour (see [`SplinePen::close`]).
pub fn closed_path(knots: &[Knot], segments: &[Segment]) -> Result<Contour, OutlineError> {
    draw(knots, segments)?.close()
}

fn draw(knots: &[Knot], segments: &[Segment]) -> Result<SplinePen, OutlineError> {
    let (Some(first), true) = (knots.first(), segments.len() + 1 == knots.len()) else {
        return Err(OutlineError::SegmentCount {
            knots: knots.len(),
            segments: segments.len(),
        });
    };

    let mut pen = SplinePen::new(first.point);
    for (index, (segment, pair)) in segments.iter().zip(knots.windows(2)).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);
        pen = match *segment {
            Segment::Line => pen.line_to(to.point),
            Segment::Curve(tension) => match (from.outgoing, to.incoming) {
                (Some(leaving), Some(arriving)) => {
                    pen.curve_to(leaving, tension, arriving, to.point)
                }
                _ => return Err(OutlineError::MissingTangent { segment: index }),
            },
        };
    }
    Ok(pen)
}
