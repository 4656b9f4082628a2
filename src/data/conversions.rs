//! Conversions between the outline model and norad / kurbo types
//!
//! norad is used to read glyphs straight out of a UFO source and to hand
//! finished outlines to other UFO tooling. kurbo paths are used for
//! measuring outlines.

use crate::data::ConversionError;
use crate::font_source::{code_point, Anchor, Contour, GlyphOutline, UfoPoint, UfoPointType};
use kurbo::{BezPath, Point, Rect, Shape};
use tracing::debug;

impl GlyphOutline {
    /// Convert from a norad glyph, validating the result.
    ///
    /// Only the first code point is kept. Components are skipped; quadratic
    /// points cannot be represented and fail the conversion.
    pub fn from_norad_glyph(glyph: &norad::Glyph) -> Result<Self, ConversionError> {
        let name = glyph.name().to_string();
        let mut codepoints = glyph.codepoints.iter();
        let unicode_hex = codepoints.next().map(|c| format!("{:04X}", c as u32));
        if codepoints.next().is_some() {
            debug!("Keeping only the first code point of '{}'", name);
        }
        if !glyph.components.is_empty() {
            debug!("Skipping {} components of '{}'", glyph.components.len(), name);
        }

        let contours = glyph
            .contours
            .iter()
            .enumerate()
            .map(|(index, contour)| Contour::from_norad_contour(index, contour))
            .collect::<Result<Vec<_>, _>>()?;

        let anchors = glyph
            .anchors
            .iter()
            .map(|anchor| {
                Anchor::new(
                    anchor.x.round() as i32,
                    anchor.y.round() as i32,
                    anchor.name.as_ref().map(ToString::to_string).unwrap_or_default(),
                )
            })
            .collect();

        let outline = Self {
            name,
            unicode_hex,
            advance_width: Some(glyph.width),
            contours,
            anchors,
        };
        outline.validate()?;
        Ok(outline)
    }

    /// Convert to a norad glyph. An undefined advance width becomes zero.
    pub fn to_norad_glyph(&self) -> Result<norad::Glyph, ConversionError> {
        self.validate()?;
        let mut glyph = norad::Glyph::new(&self.name);
        glyph.width = self.advance_width.unwrap_or(0.0);

        if let Some(hex) = &self.unicode_hex {
            let codepoint =
                code_point(hex).ok_or_else(|| ConversionError::BadUnicode(hex.clone()))?;
            glyph.codepoints.insert(codepoint);
        }

        glyph.contours = self.contours.iter().map(Contour::to_norad_contour).collect();

        for anchor in &self.anchors {
            let name = if anchor.name.is_empty() {
                None
            } else {
                Some(parse_name(&anchor.name)?)
            };
            glyph.anchors.push(norad::Anchor::new(
                anchor.x as f64,
                anchor.y as f64,
                name,
                None,
                None,
            ));
        }

        Ok(glyph)
    }

    /// Bounding box of all contours, control points included in the curve
    /// extrema computation. `None` for an outline without contours.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.contours
            .iter()
            .filter(|contour| !contour.is_empty())
            .map(|contour| contour.to_bezpath().bounding_box())
            .reduce(|a, b| a.union(b))
    }
}

fn parse_name(name: &str) -> Result<norad::Name, ConversionError> {
    name.parse::<norad::Name>()
        .map_err(|e| ConversionError::Ufo(format!("invalid name '{name}': {e}")))
}

impl Contour {
    fn from_norad_contour(index: usize, contour: &norad::Contour) -> Result<Self, ConversionError> {
        contour
            .points
            .iter()
            .enumerate()
            .map(|(point, p)| {
                let point_type = match p.typ {
                    norad::PointType::Move => UfoPointType::Move,
                    norad::PointType::Line => UfoPointType::Line,
                    norad::PointType::OffCurve => UfoPointType::OffCurve,
                    norad::PointType::Curve => UfoPointType::Curve,
                    norad::PointType::QCurve => {
                        return Err(ConversionError::Ufo(format!(
                            "contour {index}, point {point}: qcurve points are not supported"
                        )))
                    }
                };
                Ok(UfoPoint::new(p.x, p.y, point_type).with_smooth(p.smooth))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Contour::new)
    }

    fn to_norad_contour(&self) -> norad::Contour {
        let points = self
            .points()
            .iter()
            .map(|p| {
                let typ = match p.point_type {
                    UfoPointType::Move => norad::PointType::Move,
                    UfoPointType::Line => norad::PointType::Line,
                    UfoPointType::OffCurve => norad::PointType::OffCurve,
                    UfoPointType::Curve => norad::PointType::Curve,
                };
                norad::ContourPoint::new(p.x, p.y, typ, p.smooth, None, None)
            })
            .collect();
        norad::Contour::new(points, None)
    }

    /// The contour as a kurbo path.
    ///
    /// A closed contour starts at its first point and ends with the segment
    /// back to it; offcurve points accumulate until the curve point they
    /// belong to.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points().first() else {
            return path;
        };
        path.move_to(first.position());

        let closing = (!self.is_open()).then_some(first);
        let mut pending: Vec<Point> = Vec::with_capacity(2);
        for point in self.points()[1..].iter().chain(closing) {
            let pt = point.position();
            match point.point_type {
                UfoPointType::OffCurve => pending.push(pt),
                UfoPointType::Curve => match pending[..] {
                    [c1, c2] => path.curve_to(c1, c2, pt),
                    [c] => path.quad_to(c, pt),
                    _ => path.line_to(pt),
                },
                UfoPointType::Line | UfoPointType::Move => path.line_to(pt),
            }
            if point.point_type != UfoPointType::OffCurve {
                pending.clear();
            }
        }
        if closing.is_some() {
            path.close_path();
        }
        path
    }
}
