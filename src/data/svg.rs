//! SVG documents: the outline as path markup and back
//!
//! The writer produces either one `<path>` per contour, which is what an
//! external stroke-to-outline step wants, or one combined `path0`, optionally
//! filled. Anchors become small circles. The reader takes the canvas size
//! from the root element and the outline from the `path0` path.

use crate::data::svg_path::parse_path;
use crate::data::xml::{
    attribute, document, element_name, emit, finish, format_number, parse_number,
    required_attribute, xml_error,
};
use crate::data::ConversionError;
use crate::font_source::{Anchor, Contour, GlyphOutline, UfoPointType};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const ANCHOR_RADIUS: &str = "10";
const ANCHOR_STROKE_WIDTH: &str = "2.0";
const COMBINED_PATH_ID: &str = "path0";

/// Layout choices for [`write_svg`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Canvas height; model y is flipped against it.
    pub canvas_height: f64,
    /// One `<path>` per contour instead of a single combined path.
    pub separate_paths: bool,
    /// Fill the combined path. Ignored with `separate_paths`.
    pub fill: bool,
    /// Stroke width of unfilled paths
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            canvas_height: 800.0,
            separate_paths: false,
            fill: true,
            stroke_width: 0.0,
        }
    }
}

/// Path data for one contour, in SVG coordinates.
///
/// Lines are written after an `L`, cubic points after a `C`; the command
/// letter is repeated only when the segment kind changes. A closed contour
/// revisits its first point and ends with `Z`.
pub fn path_data(contour: &Contour, height: f64) -> String {
    let points = contour.points();
    let Some(first) = points.first() else {
        return String::new();
    };
    let pair = |x: f64, y: f64| format!("{},{}", format_number(x), format_number(height - y));

    let mut d = format!("M {}", pair(first.x, first.y));
    let closing = (!contour.is_open()).then_some(first);
    let mut in_curve: Option<bool> = None;
    for point in points[1..].iter().chain(closing) {
        let curve = matches!(
            point.point_type,
            UfoPointType::OffCurve | UfoPointType::Curve
        );
        if in_curve != Some(curve) {
            d.push_str(if curve { " C" } else { " L" });
            in_curve = Some(curve);
        }
        d.push(' ');
        d.push_str(&pair(point.x, point.y));
    }
    if closing.is_some() {
        d.push_str(" Z");
    }
    d
}

/// Serialize an outline as an SVG document.
pub fn write_svg(glyph: &GlyphOutline, options: &SvgOptions) -> Result<String, ConversionError> {
    glyph.validate()?;
    let height = options.canvas_height;

    let mut writer = document(Some("no"))?;
    let mut root = BytesStart::new("svg");
    if let Some(width) = glyph.advance_width {
        root.push_attribute(("width", format_number(width).as_str()));
    }
    root.push_attribute(("height", format_number(height).as_str()));
    root.push_attribute(("version", "1.1"));
    root.push_attribute(("xmlns", SVG_NAMESPACE));
    emit(&mut writer, Event::Start(root))?;

    let stroke_width = format_number(options.stroke_width);
    if options.separate_paths {
        for (n, contour) in glyph.contours.iter().enumerate() {
            let id = format!("path{n}");
            let element = path_element(&path_data(contour, height), &id, false, &stroke_width);
            emit(&mut writer, Event::Empty(element))?;
        }
    } else {
        let d = glyph
            .contours
            .iter()
            .map(|contour| path_data(contour, height))
            .collect::<Vec<_>>()
            .join(" ");
        let stroke_width = if options.fill { "0.0" } else { stroke_width.as_str() };
        let element = path_element(&d, COMBINED_PATH_ID, options.fill, stroke_width);
        emit(&mut writer, Event::Empty(element))?;
    }

    for anchor in &glyph.anchors {
        let mut circle = BytesStart::new("circle");
        circle.push_attribute(("cx", anchor.x.to_string().as_str()));
        circle.push_attribute(("cy", format_number(height - anchor.y as f64).as_str()));
        circle.push_attribute(("stroke", "black"));
        circle.push_attribute(("r", ANCHOR_RADIUS));
        circle.push_attribute(("id", anchor.name.as_str()));
        circle.push_attribute(("stroke-width", ANCHOR_STROKE_WIDTH));
        emit(&mut writer, Event::Empty(circle))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("svg")))?;
    finish(writer)
}

fn path_element(d: &str, id: &str, fill: bool, stroke_width: &str) -> BytesStart<'static> {
    let (fill, linejoin) = if fill {
        ("black", "round")
    } else {
        ("none", "mitter")
    };
    let mut element = BytesStart::new("path");
    element.push_attribute(("d", d));
    element.push_attribute(("fill", fill));
    element.push_attribute(("stroke", "black"));
    element.push_attribute((
        "style",
        format!("stroke-linecap:butt;stroke-linejoin:{linejoin}").as_str(),
    ));
    element.push_attribute(("id", id));
    element.push_attribute(("stroke-width", stroke_width));
    element
}

/// A `<path>` found while scanning the document
struct PathElement {
    id: Option<String>,
    d: String,
}

/// Parse an SVG document into a validated outline named `name`.
///
/// The canvas `height` is required for the y flip; `width`, if present,
/// becomes the advance width. Both are rounded to whole units and may carry
/// a `px` suffix. The outline is read from the path with `id="path0"`; when
/// there is none, the first path is used and a warning is logged. Circles
/// with an `id` are read back as anchors.
pub fn parse_svg(text: &str, name: &str) -> Result<GlyphOutline, ConversionError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut canvas: Option<(Option<f64>, f64)> = None;
    let mut paths = Vec::new();
    let mut circles = Vec::new();
    loop {
        let element = match reader.read_event().map_err(xml_error)? {
            Event::Start(element) | Event::Empty(element) => element,
            Event::Eof => break,
            _ => continue,
        };
        let tag = element_name(&element);
        if canvas.is_none() {
            if tag != "svg" {
                return Err(ConversionError::UnexpectedRoot {
                    expected: "svg",
                    found: tag,
                });
            }
            canvas = Some(read_canvas(&element)?);
            continue;
        }
        match tag.as_str() {
            "path" => {
                if let Some(d) = attribute(&element, "d")? {
                    paths.push(PathElement {
                        id: attribute(&element, "id")?,
                        d,
                    });
                }
            }
            "circle" => circles.push(element.into_owned()),
            other => debug!("Skipping SVG element <{}>", other),
        }
    }

    let (width, height) = canvas.ok_or_else(|| xml_error("document has no root element"))?;
    let path = match paths
        .iter()
        .position(|p| p.id.as_deref() == Some(COMBINED_PATH_ID))
    {
        Some(index) => &paths[index],
        None => {
            let first = paths.first().ok_or(ConversionError::MissingPath)?;
            warn!(
                "No path with id=\"{}\", using the first path (id {:?})",
                COMBINED_PATH_ID, first.id
            );
            first
        }
    };

    let mut glyph = GlyphOutline::new(name);
    glyph.advance_width = width;
    glyph.contours = parse_path(&path.d, height)?;
    for circle in &circles {
        if let Some(anchor) = read_anchor(circle, height)? {
            glyph.anchors.push(anchor);
        }
    }
    glyph.validate()?;
    Ok(glyph)
}

fn read_canvas(root: &BytesStart<'_>) -> Result<(Option<f64>, f64), ConversionError> {
    let length = |attribute: &'static str, text: &str| {
        parse_number("svg", attribute, text.trim().trim_end_matches("px")).map(f64::round)
    };
    let height = length("height", &required_attribute(root, "svg", "height")?)?;
    let width = attribute(root, "width")?
        .map(|text| length("width", &text))
        .transpose()?;
    Ok((width, height))
}

fn read_anchor(circle: &BytesStart<'_>, height: f64) -> Result<Option<Anchor>, ConversionError> {
    let Some(name) = attribute(circle, "id")? else {
        debug!("Skipping circle without id");
        return Ok(None);
    };
    let cx = parse_number("circle", "cx", &required_attribute(circle, "circle", "cx")?)?;
    let cy = parse_number("circle", "cy", &required_attribute(circle, "circle", "cy")?)?;
    Ok(Some(Anchor::new(
        cx.round() as i32,
        (height - cy).round() as i32,
        name,
    )))
}
