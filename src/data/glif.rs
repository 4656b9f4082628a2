//! Glif (UFO glyph interchange XML) reader and writer
//!
//! Only the part of format 2 this project produces is understood:
//!
//! ```xml
//! <glyph name="a" format="2">
//!     <advance width="500"/>
//!     <unicode hex="0061"/>
//!     <anchor x="250" y="0" name="bottom"/>
//!     <outline>
//!         <contour>
//!             <point x="0" y="0" type="line" smooth="yes"/>
//!             <point x="10" y="20"/>
//!         </contour>
//!     </outline>
//! </glyph>
//! ```
//!
//! A point without `type` is an offcurve point. Components, guidelines,
//! images and libs are skipped when reading and never written.

use crate::data::xml::{
    attribute, document, element_name, emit, finish, format_number, parse_number,
    required_attribute, xml_error,
};
use crate::data::ConversionError;
use crate::font_source::{
    code_point, Anchor, Contour, GlyphOutline, UfoPoint, UfoPointType,
};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

/// Parse and validate a glif document.
pub fn parse_glif(text: &str) -> Result<GlyphOutline, ConversionError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut state = GlifReader::default();
    let mut open: Vec<String> = Vec::new();
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(element) => {
                state.enter(&open, &element)?;
                open.push(element_name(&element));
            }
            Event::Empty(element) => {
                state.enter(&open, &element)?;
                state.leave(&element_name(&element));
            }
            Event::End(_) => {
                if let Some(name) = open.pop() {
                    state.leave(&name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let glyph = state.finish()?;
    glyph.validate()?;
    Ok(glyph)
}

#[derive(Default)]
struct GlifReader {
    glyph: Option<GlyphOutline>,
    contour: Option<Vec<UfoPoint>>,
}

impl GlifReader {
    fn glyph(&mut self) -> &mut GlyphOutline {
        // Only called for children of <glyph>, which `enter` creates first.
        self.glyph.get_or_insert_with(|| GlyphOutline::new(""))
    }

    fn enter(&mut self, open: &[String], element: &BytesStart<'_>) -> Result<(), ConversionError> {
        let name = element_name(element);
        let parent = match open.last() {
            Some(parent) => parent.as_str(),
            None => {
                if name != "glyph" {
                    return Err(ConversionError::UnexpectedRoot {
                        expected: "glyph",
                        found: name,
                    });
                }
                let glyph_name = required_attribute(element, "glyph", "name")?;
                self.glyph = Some(GlyphOutline::new(glyph_name));
                return Ok(());
            }
        };

        match (parent, name.as_str()) {
            ("glyph", "advance") => {
                if let Some(width) = attribute(element, "width")? {
                    self.glyph().advance_width = Some(parse_number("advance", "width", &width)?);
                }
            }
            ("glyph", "unicode") => {
                let hex = required_attribute(element, "unicode", "hex")?;
                if code_point(&hex).is_none() {
                    return Err(ConversionError::BadUnicode(hex));
                }
                let glyph = self.glyph();
                if glyph.unicode_hex.is_none() {
                    glyph.unicode_hex = Some(hex);
                } else {
                    debug!("Ignoring additional code point {} for '{}'", hex, glyph.name);
                }
            }
            ("glyph", "anchor") => {
                let anchor = Anchor::new(
                    anchor_coordinate(element, "x")?,
                    anchor_coordinate(element, "y")?,
                    attribute(element, "name")?.unwrap_or_default(),
                );
                self.glyph().anchors.push(anchor);
            }
            ("outline", "contour") => self.contour = Some(Vec::new()),
            ("contour", "point") => {
                let contour_index = self.glyph().contours.len();
                let points = self.contour.get_or_insert_with(Vec::new);
                let point_index = points.len();
                points.push(read_point(element, contour_index, point_index)?);
            }
            (parent, child) => debug!("Skipping <{}> inside <{}>", child, parent),
        }
        Ok(())
    }

    fn leave(&mut self, name: &str) {
        if name != "contour" {
            return;
        }
        match self.contour.take() {
            Some(points) if !points.is_empty() => self.glyph().contours.push(Contour::new(points)),
            _ => debug!("Skipping empty contour"),
        }
    }

    fn finish(self) -> Result<GlyphOutline, ConversionError> {
        self.glyph.ok_or_else(|| xml_error("document has no root element"))
    }
}

fn read_point(
    element: &BytesStart<'_>,
    contour: usize,
    point: usize,
) -> Result<UfoPoint, ConversionError> {
    let x = required_attribute(element, "point", "x")?;
    let y = required_attribute(element, "point", "y")?;
    let point_type = match attribute(element, "type")? {
        None => UfoPointType::OffCurve,
        Some(value) => value
            .parse::<UfoPointType>()
            .map_err(|value| ConversionError::BadPointType {
                contour,
                point,
                value,
            })?,
    };
    let smooth = attribute(element, "smooth")?.as_deref() == Some("yes");

    Ok(UfoPoint {
        x: parse_number("point", "x", &x)?,
        y: parse_number("point", "y", &y)?,
        point_type,
        smooth,
    })
}

fn anchor_coordinate(element: &BytesStart<'_>, name: &'static str) -> Result<i32, ConversionError> {
    let text = required_attribute(element, "anchor", name)?;
    let value = parse_number("anchor", name, &text)?;
    if value.fract() != 0.0 || value.abs() > i32::MAX as f64 {
        return Err(ConversionError::NotAnInteger {
            attribute: name,
            value: text,
        });
    }
    Ok(value as i32)
}

/// Serialize an outline as a format 2 glif document.
///
/// The outline is validated first; an invalid outline is never written.
pub fn write_glif(glyph: &GlyphOutline) -> Result<String, ConversionError> {
    glyph.validate()?;

    let mut writer = document(None)?;

    let mut root = BytesStart::new("glyph");
    root.push_attribute(("name", glyph.name.as_str()));
    root.push_attribute(("format", "2"));
    emit(&mut writer, Event::Start(root))?;

    if let Some(width) = glyph.advance_width {
        let mut advance = BytesStart::new("advance");
        advance.push_attribute(("width", format_number(width).as_str()));
        emit(&mut writer, Event::Empty(advance))?;
    }

    if let Some(hex) = &glyph.unicode_hex {
        let mut unicode = BytesStart::new("unicode");
        unicode.push_attribute(("hex", hex.as_str()));
        emit(&mut writer, Event::Empty(unicode))?;
    }

    for anchor in &glyph.anchors {
        let mut element = BytesStart::new("anchor");
        element.push_attribute(("x", anchor.x.to_string().as_str()));
        element.push_attribute(("y", anchor.y.to_string().as_str()));
        element.push_attribute(("name", anchor.name.as_str()));
        emit(&mut writer, Event::Empty(element))?;
    }

    if !glyph.contours.is_empty() {
        emit(&mut writer, Event::Start(BytesStart::new("outline")))?;
        for contour in &glyph.contours {
            emit(&mut writer, Event::Start(BytesStart::new("contour")))?;
            for point in contour.points() {
                emit(&mut writer, Event::Empty(point_element(point)))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new("contour")))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("outline")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("glyph")))?;
    finish(writer)
}

fn point_element(point: &UfoPoint) -> BytesStart<'static> {
    let mut element = BytesStart::new("point");
    element.push_attribute(("x", format_number(point.x).as_str()));
    element.push_attribute(("y", format_number(point.y).as_str()));
    if point.point_type != UfoPointType::OffCurve {
        element.push_attribute(("type", point.point_type.as_str()));
    }
    if point.smooth {
        element.push_attribute(("smooth", "yes"));
    }
    element
}
