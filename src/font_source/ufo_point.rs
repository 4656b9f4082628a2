//! UFO point data structures
//!
//! Points carry their structural role in the outline (move, line, curve or
//! offcurve) as a closed enum, so the contour grammar and every serializer
//! match on it exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point type as written in the `type` attribute of a glif `<point>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UfoPointType {
    /// First point of an open contour
    #[serde(rename = "move")]
    Move,
    /// Draws a straight line from the previous on-curve point
    #[serde(rename = "line")]
    Line,
    /// Ends a cubic segment whose two control points precede it
    #[serde(rename = "curve")]
    Curve,
    /// Cubic control point (no `type` attribute in glif)
    #[serde(rename = "offcurve")]
    OffCurve,
}

impl UfoPointType {
    /// Check if this point type is on-curve (not a control point)
    pub fn is_on_curve(&self) -> bool {
        !matches!(self, UfoPointType::OffCurve)
    }

    /// The glif attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            UfoPointType::Move => "move",
            UfoPointType::Line => "line",
            UfoPointType::Curve => "curve",
            UfoPointType::OffCurve => "offcurve",
        }
    }
}

impl fmt::Display for UfoPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UfoPointType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(UfoPointType::Move),
            "line" => Ok(UfoPointType::Line),
            "curve" => Ok(UfoPointType::Curve),
            "offcurve" => Ok(UfoPointType::OffCurve),
            other => Err(other.to_string()),
        }
    }
}

/// A point of a glyph contour
///
/// Coordinates are real-valued: glif files store integers, but geometry
/// construction produces fractional values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UfoPoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub point_type: UfoPointType,
    /// Tangent continuity marker. Not enforced by the validator; see
    /// [`crate::font_source::smooth`].
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub smooth: bool,
}

impl UfoPoint {
    pub fn new(x: f64, y: f64, point_type: UfoPointType) -> Self {
        Self {
            x,
            y,
            point_type,
            smooth: false,
        }
    }

    /// Create a move point (first point of an open contour)
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::Move)
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::Line)
    }

    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::OffCurve)
    }

    pub fn curve_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::Curve)
    }

    /// Set the smooth flag
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Same point with a different type
    pub fn with_type(mut self, point_type: UfoPointType) -> Self {
        self.point_type = point_type;
        self
    }

    pub fn is_on_curve(&self) -> bool {
        self.point_type.is_on_curve()
    }

    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}
