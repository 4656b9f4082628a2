//! Contour grammar
//!
//! A contour is read as a sequence of point roles. Each incoming point type
//! moves the rolling role through [`Role::next`]; a transition that has no
//! entry there is a structural error. Closed contours (first point `line` or
//! `curve`) are checked as if the first point were appended again at the end.
//! Open contours (first point `move`) have no closing edge and must end on an
//! on-curve point.

use crate::font_source::error::{GrammarViolation, OutlineError};
use crate::font_source::{Contour, GlyphOutline, UfoPoint, UfoPointType};

/// Role of the most recently visited point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    LineNode,
    FirstOffCurve,
    SecondOffCurve,
    CurveNode,
}

impl Role {
    /// Role established by the first point of a contour
    pub fn initial(point_type: UfoPointType) -> Result<Role, GrammarViolation> {
        match point_type {
            UfoPointType::Move | UfoPointType::Line => Ok(Role::LineNode),
            UfoPointType::Curve => Ok(Role::CurveNode),
            UfoPointType::OffCurve => Err(GrammarViolation::StartsWithOffCurve),
        }
    }

    /// Transition on the next point of the contour
    pub fn next(self, incoming: UfoPointType) -> Result<Role, GrammarViolation> {
        use GrammarViolation::*;
        use Role::*;

        match (incoming, self) {
            (UfoPointType::Line, LineNode | CurveNode) => Ok(LineNode),
            (UfoPointType::Line, FirstOffCurve | SecondOffCurve) => Err(LineAfterOffCurve),
            (UfoPointType::Curve, SecondOffCurve) => Ok(CurveNode),
            (UfoPointType::Curve, LineNode | FirstOffCurve | CurveNode) => {
                Err(CurveWithoutOffCurves)
            }
            (UfoPointType::OffCurve, LineNode | CurveNode) => Ok(FirstOffCurve),
            (UfoPointType::OffCurve, FirstOffCurve) => Ok(SecondOffCurve),
            (UfoPointType::OffCurve, SecondOffCurve) => Err(ThreeOffCurves),
            (UfoPointType::Move, _) => Err(MoveAfterFirst),
        }
    }
}

/// Check one contour. `index` only labels errors.
pub fn validate_contour(index: usize, points: &[UfoPoint]) -> Result<(), OutlineError> {
    let grammar = |point: usize, violation: GrammarViolation| OutlineError::Grammar {
        contour: index,
        point,
        violation,
    };

    let Some(first) = points.first() else {
        return Err(OutlineError::EmptyContour { contour: index });
    };

    if let Some(point) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(OutlineError::NonFiniteCoordinate {
            contour: index,
            point,
        });
    }

    let mut role = Role::initial(first.point_type).map_err(|v| grammar(0, v))?;

    for (n, point) in points.iter().enumerate().skip(1) {
        role = role.next(point.point_type).map_err(|v| grammar(n, v))?;
    }

    if first.point_type == UfoPointType::Move {
        let last = points[points.len() - 1].point_type;
        if !matches!(last, UfoPointType::Line | UfoPointType::Curve) {
            return Err(grammar(
                points.len() - 1,
                GrammarViolation::OpenContourEnd(last),
            ));
        }
    } else {
        role.next(first.point_type)
            .map_err(|v| grammar(points.len(), v))?;
    }

    Ok(())
}

/// The character named by a glif `unicode` hex value, if it is a scalar value.
pub fn code_point(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Check every contour and the glyph-level fields of an outline.
pub fn validate_outline(glyph: &GlyphOutline) -> Result<(), OutlineError> {
    if glyph.name.is_empty() {
        return Err(OutlineError::EmptyName);
    }
    if let Some(width) = glyph.advance_width {
        if !width.is_finite() {
            return Err(OutlineError::NonFiniteAdvance(width));
        }
    }
    if let Some(hex) = &glyph.unicode_hex {
        if code_point(hex).is_none() {
            return Err(OutlineError::BadUnicode(hex.clone()));
        }
    }
    for (index, contour) in glyph.contours.iter().enumerate() {
        validate_contour(index, contour.points())?;
    }
    Ok(())
}

impl Contour {
    /// Check this contour against the grammar.
    pub fn validate(&self) -> Result<(), OutlineError> {
        validate_contour(0, self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contour(types: &[UfoPointType]) -> Vec<UfoPoint> {
        types
            .iter()
            .enumerate()
            .map(|(i, &t)| UfoPoint::new(i as f64, 0.0, t))
            .collect()
    }

    use UfoPointType::{Curve, Line, Move, OffCurve};

    fn violation(types: &[UfoPointType]) -> (usize, GrammarViolation) {
        match validate_contour(3, &contour(types)) {
            Err(OutlineError::Grammar {
                contour,
                point,
                violation,
            }) => {
                assert_eq!(contour, 3);
                (point, violation)
            }
            other => panic!("expected a grammar error, got {other:?}"),
        }
    }

    #[test]
    fn transition_table() {
        use GrammarViolation::*;
        use Role::*;

        let cases = [
            (LineNode, Line, Ok(LineNode)),
            (CurveNode, Line, Ok(LineNode)),
            (FirstOffCurve, Line, Err(LineAfterOffCurve)),
            (SecondOffCurve, Line, Err(LineAfterOffCurve)),
            (SecondOffCurve, Curve, Ok(CurveNode)),
            (LineNode, Curve, Err(CurveWithoutOffCurves)),
            (FirstOffCurve, Curve, Err(CurveWithoutOffCurves)),
            (CurveNode, Curve, Err(CurveWithoutOffCurves)),
            (LineNode, OffCurve, Ok(FirstOffCurve)),
            (CurveNode, OffCurve, Ok(FirstOffCurve)),
            (FirstOffCurve, OffCurve, Ok(SecondOffCurve)),
            (SecondOffCurve, OffCurve, Err(ThreeOffCurves)),
            (LineNode, Move, Err(MoveAfterFirst)),
            (CurveNode, Move, Err(MoveAfterFirst)),
        ];
        for (from, incoming, expected) in cases {
            assert_eq!(from.next(incoming), expected, "{from:?} + {incoming}");
        }
    }

    #[test]
    fn initial_roles() {
        assert_eq!(Role::initial(Move), Ok(Role::LineNode));
        assert_eq!(Role::initial(Line), Ok(Role::LineNode));
        assert_eq!(Role::initial(Curve), Ok(Role::CurveNode));
        assert_eq!(
            Role::initial(OffCurve),
            Err(GrammarViolation::StartsWithOffCurve)
        );
    }

    #[test]
    fn closed_cubic_is_valid() {
        assert!(validate_contour(0, &contour(&[Line, OffCurve, OffCurve, Curve])).is_ok());
        assert!(validate_contour(0, &contour(&[Curve, OffCurve, OffCurve, Curve, OffCurve, OffCurve])).is_ok());
        assert!(validate_contour(0, &contour(&[Line, Line, Line, Line])).is_ok());
    }

    #[test]
    fn three_offcurves_rejected() {
        assert_eq!(
            violation(&[Line, OffCurve, OffCurve, OffCurve]),
            (3, GrammarViolation::ThreeOffCurves)
        );
    }

    #[test]
    fn open_contour_rules() {
        assert!(validate_contour(0, &contour(&[Move, Line, Line])).is_ok());
        assert!(validate_contour(0, &contour(&[Move, OffCurve, OffCurve, Curve])).is_ok());
        assert_eq!(
            violation(&[Move, OffCurve]),
            (1, GrammarViolation::OpenContourEnd(OffCurve))
        );
        assert_eq!(
            violation(&[Move]),
            (0, GrammarViolation::OpenContourEnd(Move))
        );
        // A bad transition is reported before a bad ending.
        assert_eq!(
            violation(&[Move, Move, OffCurve]),
            (1, GrammarViolation::MoveAfterFirst)
        );
        assert_eq!(
            violation(&[Move, OffCurve, OffCurve, OffCurve]),
            (3, GrammarViolation::ThreeOffCurves)
        );
    }

    #[test]
    fn closing_edge_is_checked() {
        // The virtual revisit of the curve start needs two offcurves before it.
        assert_eq!(
            violation(&[Curve, Line, OffCurve]),
            (3, GrammarViolation::CurveWithoutOffCurves)
        );
        assert_eq!(
            violation(&[Line, OffCurve, OffCurve]),
            (3, GrammarViolation::LineAfterOffCurve)
        );
        // An open contour has no closing edge.
        assert!(validate_contour(0, &contour(&[Move, Line, OffCurve, OffCurve, Curve])).is_ok());
    }

    #[test]
    fn misplaced_points() {
        assert_eq!(
            violation(&[OffCurve, OffCurve, Curve]),
            (0, GrammarViolation::StartsWithOffCurve)
        );
        assert_eq!(
            violation(&[Line, Line, Move, Line]),
            (2, GrammarViolation::MoveAfterFirst)
        );
        assert_eq!(
            violation(&[Line, OffCurve, Line]),
            (2, GrammarViolation::LineAfterOffCurve)
        );
    }

    #[test]
    fn empty_and_non_finite() {
        assert_eq!(
            validate_contour(5, &[]),
            Err(OutlineError::EmptyContour { contour: 5 })
        );
        let points = [UfoPoint::line_to(0.0, 0.0), UfoPoint::line_to(f64::NAN, 1.0)];
        assert_eq!(
            validate_contour(1, &points),
            Err(OutlineError::NonFiniteCoordinate {
                contour: 1,
                point: 1
            })
        );
    }

    #[test]
    fn outline_fields() {
        let mut glyph = GlyphOutline::new("a");
        assert!(validate_outline(&glyph).is_ok());

        glyph.advance_width = Some(f64::INFINITY);
        assert_eq!(
            validate_outline(&glyph),
            Err(OutlineError::NonFiniteAdvance(f64::INFINITY))
        );

        glyph.advance_width = Some(500.0);
        glyph.unicode_hex = Some("1F600".to_string());
        assert!(validate_outline(&glyph).is_ok());
        glyph.unicode_hex = Some("DFFF".to_string());
        assert_eq!(
            validate_outline(&glyph),
            Err(OutlineError::BadUnicode("DFFF".to_string()))
        );

        glyph.unicode_hex = None;
        glyph.name.clear();
        assert_eq!(validate_outline(&glyph), Err(OutlineError::EmptyName));
    }

    #[test]
    fn outline_reports_contour_index() {
        let glyph = GlyphOutline {
            contours: vec![
                Contour::new(contour(&[Move, Line])),
                Contour::new(contour(&[Line, OffCurve, Line])),
            ],
            ..GlyphOutline::new("b")
        };
        assert!(matches!(
            validate_outline(&glyph),
            Err(OutlineError::Grammar { contour: 1, point: 2, .. })
        ));
    }
}
