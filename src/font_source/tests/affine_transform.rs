//! Transform tests
//!
//! Placing a shared template must never disturb the template itself.

use crate::font_source::{Anchor, Contour, GlyphOutline, UfoPoint, UfoPointType};
use kurbo::{Affine, Vec2};

fn dot() -> Contour {
    Contour::new(vec![
        UfoPoint::curve_to(0.0, 10.0).with_smooth(true),
        UfoPoint::off_curve(5.5, 10.0),
        UfoPoint::off_curve(10.0, 5.5),
        UfoPoint::curve_to(10.0, 0.0),
        UfoPoint::off_curve(10.0, -5.5),
        UfoPoint::off_curve(5.5, -10.0),
        UfoPoint::curve_to(0.0, -10.0),
        UfoPoint::off_curve(-5.5, -10.0),
        UfoPoint::off_curve(-10.0, -5.5),
        UfoPoint::curve_to(-10.0, 0.0),
        UfoPoint::off_curve(-10.0, 5.5),
        UfoPoint::off_curve(-5.5, 10.0),
    ])
}

#[test]
fn translation_copies_template() {
    let template = dot();
    let snapshot = template.clone();

    let i_dot = template.translated(Vec2::new(120.0, 450.0));
    let j_dot = template.translated(Vec2::new(80.0, 450.0));

    assert_eq!(template, snapshot);
    assert_eq!(i_dot.points()[0].x, 120.0);
    assert_eq!(i_dot.points()[0].y, 460.0);
    assert_eq!(j_dot.points()[0].x, 80.0);
    assert_ne!(i_dot, j_dot);
}

#[test]
fn translation_keeps_types_and_smooth() {
    let moved = dot().translated(Vec2::new(1.0, 2.0));
    for (before, after) in dot().points().iter().zip(moved.points()) {
        assert_eq!(before.point_type, after.point_type);
        assert_eq!(before.smooth, after.smooth);
        assert_eq!(after.x - before.x, 1.0);
        assert_eq!(after.y - before.y, 2.0);
    }
    assert!(moved.validate().is_ok());
}

#[test]
fn scaled_outline() {
    let glyph = GlyphOutline {
        advance_width: Some(12.5),
        anchors: vec![Anchor::new(3, 7, "top")],
        contours: vec![Contour::new(vec![
            UfoPoint::move_to(0.0, 0.0),
            UfoPoint::line_to(1.5, 2.0),
        ])],
        ..GlyphOutline::new("i")
    };

    let scaled = glyph.scaled(40.0);

    assert_eq!(scaled.advance_width, Some(500.0));
    assert_eq!(scaled.anchors, vec![Anchor::new(120, 280, "top")]);
    assert_eq!(scaled.contours[0].points()[1].x, 60.0);
    assert_eq!(scaled.contours[0].points()[1].y, 80.0);
    assert_eq!(
        scaled.contours[0].points()[0].point_type,
        UfoPointType::Move
    );
    // Source untouched
    assert_eq!(glyph.advance_width, Some(12.5));
    assert_eq!(glyph.contours[0].points()[1].x, 1.5);
}

#[test]
fn affine_transform_rounds_anchors() {
    let anchor = Anchor::new(1, 1, "bottom");
    let moved = anchor.transformed(Affine::translate((0.4, 0.6)));
    assert_eq!(moved, Anchor::new(1, 2, "bottom"));
}
