//! Glyph outline data structures
//!
//! A [`GlyphOutline`] owns its contours and anchors outright. Nothing here
//! mutates a shared template: every transform returns a fresh value, so a
//! contour reused across many glyphs (a dot, a loop, a hacek) is copied with
//! its offset each time it is placed.

use crate::font_source::validate::validate_outline;
use crate::font_source::{OutlineError, UfoPoint, UfoPointType};
use kurbo::{Affine, Vec2};
use serde::{Deserialize, Serialize};

/// A named landmark on a glyph, used to position combining marks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
    pub name: String,
}

impl Anchor {
    pub fn new(x: i32, y: i32, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
        }
    }

    /// Apply `affine`, rounding to the nearest design unit.
    pub fn transformed(&self, affine: Affine) -> Self {
        let p = affine * kurbo::Point::new(self.x as f64, self.y as f64);
        Self {
            x: p.x.round() as i32,
            y: p.y.round() as i32,
            name: self.name.clone(),
        }
    }
}

/// An ordered run of points forming one open or closed sub-path
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contour {
    points: Vec<UfoPoint>,
}

impl Contour {
    /// Wrap a point list. Use [`Contour::validate`] before handing the contour
    /// to a serializer.
    pub fn new(points: Vec<UfoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[UfoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<UfoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Open contours start with a `move` point and have no closing edge.
    pub fn is_open(&self) -> bool {
        self.points
            .first()
            .is_some_and(|p| p.point_type == UfoPointType::Move)
    }

    /// A copy of this contour shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        self.transformed(Affine::translate(offset))
    }

    /// A copy of this contour with every point mapped through `affine`.
    pub fn transformed(&self, affine: Affine) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| {
                let moved = affine * p.position();
                UfoPoint {
                    x: moved.x,
                    y: moved.y,
                    ..*p
                }
            })
            .collect();
        Self { points }
    }
}

impl FromIterator<UfoPoint> for Contour {
    fn from_iter<I: IntoIterator<Item = UfoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A glyph's outline, the unit every reader produces and every writer consumes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphOutline {
    pub name: String,
    /// Code point as uppercase hex without prefix, e.g. `"0061"`
    pub unicode_hex: Option<String>,
    /// Horizontal advance in design units; `None` means undefined, not zero
    pub advance_width: Option<f64>,
    pub contours: Vec<Contour>,
    pub anchors: Vec<Anchor>,
}

impl GlyphOutline {
    /// An empty outline with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unicode_hex: None,
            advance_width: None,
            contours: Vec::new(),
            anchors: Vec::new(),
        }
    }

    /// Assemble and validate an outline in one step.
    pub fn build(
        name: impl Into<String>,
        advance_width: Option<f64>,
        contours: Vec<Contour>,
    ) -> Result<Self, OutlineError> {
        let glyph = Self {
            advance_width,
            contours,
            ..Self::new(name)
        };
        glyph.validate()?;
        Ok(glyph)
    }

    /// Check the glyph fields and every contour.
    pub fn validate(&self) -> Result<(), OutlineError> {
        validate_outline(self)
    }

    /// A copy with contours and anchors mapped through `affine`. The advance
    /// width is left unchanged.
    pub fn transformed(&self, affine: Affine) -> Self {
        Self {
            name: self.name.clone(),
            unicode_hex: self.unicode_hex.clone(),
            advance_width: self.advance_width,
            contours: self.contours.iter().map(|c| c.transformed(affine)).collect(),
            anchors: self.anchors.iter().map(|a| a.transformed(affine)).collect(),
        }
    }

    /// A copy shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        self.transformed(Affine::translate(offset))
    }

    /// A copy uniformly scaled about the origin, advance width included.
    /// Used to map construction units onto the font's design units.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            advance_width: self.advance_width.map(|w| w * factor),
            ..self.transformed(Affine::scale(factor))
        }
    }

    /// Total number of points across all contours
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}
