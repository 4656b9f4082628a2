//! Shared XML plumbing for the glif and SVG codecs

use crate::data::ConversionError;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Writer;
use std::fmt::Display;

pub(crate) fn xml_error(error: impl Display) -> ConversionError {
    ConversionError::Xml(error.to_string())
}

/// Write one event, folding the writer's error into ours.
pub(crate) fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), ConversionError> {
    writer
        .write_event(event)
        .map_err(|e| ConversionError::Write(e.to_string()))
}

/// A writer indenting by four spaces, with the XML declaration already written.
pub(crate) fn document(standalone: Option<&str>) -> Result<Writer<Vec<u8>>, ConversionError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), standalone)),
    )?;
    Ok(writer)
}

/// Finish a document from [`document`], ending it with a newline.
pub(crate) fn finish(writer: Writer<Vec<u8>>) -> Result<String, ConversionError> {
    let mut text =
        String::from_utf8(writer.into_inner()).map_err(|e| ConversionError::Write(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Shortest text that reads back as the same value; integral values carry no
/// fractional part.
pub fn format_number(value: f64) -> String {
    // Adding zero folds -0.0 into 0.0.
    format!("{}", value + 0.0)
}

/// Element name as an owned string
pub(crate) fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Unescaped value of `name`, if present.
pub(crate) fn attribute(
    element: &BytesStart<'_>,
    name: &str,
) -> Result<Option<String>, ConversionError> {
    match element.try_get_attribute(name).map_err(xml_error)? {
        Some(attr) => Ok(Some(attr.unescape_value().map_err(xml_error)?.into_owned())),
        None => Ok(None),
    }
}

pub(crate) fn required_attribute(
    element: &BytesStart<'_>,
    element_label: &'static str,
    name: &'static str,
) -> Result<String, ConversionError> {
    attribute(element, name)?.ok_or(ConversionError::MissingAttribute {
        element: element_label,
        attribute: name,
    })
}

/// Parse a numeric attribute value: as an integer when that is lossless,
/// otherwise as a finite float.
pub(crate) fn parse_number(
    element: &'static str,
    attribute: &'static str,
    value: &str,
) -> Result<f64, ConversionError> {
    let trimmed = value.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(int as f64);
    }
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => Ok(float),
        _ => Err(ConversionError::NotANumber {
            element,
            attribute,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_without_trailing_zero() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(1.0 / 3.0).parse::<f64>().unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn numbers_parse_int_then_float() {
        assert_eq!(parse_number("point", "x", "42"), Ok(42.0));
        assert_eq!(parse_number("point", "x", " -7.25 "), Ok(-7.25));
        assert_eq!(
            parse_number("point", "y", "ten"),
            Err(ConversionError::NotANumber {
                element: "point",
                attribute: "y",
                value: "ten".to_string()
            })
        );
        assert!(parse_number("point", "y", "NaN").is_err());
        assert!(parse_number("point", "y", "inf").is_err());
    }
}
