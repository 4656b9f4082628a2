//! Errors from reading and writing glif and SVG documents

use crate::font_source::OutlineError;

/// A document that could not be converted.
///
/// Every variant aborts the whole conversion; there are no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// Not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(String),
    /// The document root is not the element the reader expects.
    #[error("expected <{expected}> root element, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
    /// A required attribute is absent.
    #[error("<{element}> is missing the `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    /// An attribute that must hold a number holds something else.
    #[error("<{element}> attribute `{attribute}` must be a number, got `{value}`")]
    NotANumber {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
    /// An anchor coordinate with a fractional part.
    #[error("<anchor> attribute `{attribute}` must be an integer, got `{value}`")]
    NotAnInteger {
        attribute: &'static str,
        value: String,
    },
    /// A `type` attribute outside move/line/curve/offcurve.
    #[error("contour {contour}, point {point}: unsupported point type `{value}`")]
    BadPointType {
        contour: usize,
        point: usize,
        value: String,
    },
    /// A `<unicode hex>` value that is not a code point.
    #[error("`{0}` is not a hexadecimal code point")]
    BadUnicode(String),
    /// An SVG path command outside the supported subset (arcs included).
    #[error("SVG path command `{0}` is not supported")]
    UnsupportedCommand(String),
    /// An operand token that does not parse.
    #[error("token {index}: malformed operand `{token}` for `{command}`")]
    MalformedOperand {
        command: char,
        token: String,
        index: usize,
    },
    /// A cubic command whose coordinate pairs do not come in threes.
    #[error("`{command}` needs coordinate pairs in groups of three, got {pairs}")]
    CurveArity { command: char, pairs: usize },
    /// A drawing command with no operands.
    #[error("token {index}: `{command}` has no coordinates")]
    MissingOperands { command: char, index: usize },
    /// `z` with no open contour to close.
    #[error("token {index}: `{command}` closes an empty contour")]
    CloseWithoutContour { command: char, index: usize },
    /// The SVG has no `<path>` element.
    #[error("SVG document has no <path> element")]
    MissingPath,
    /// A glyph that norad cannot represent.
    #[error("cannot convert glyph for UFO: {0}")]
    Ufo(String),
    /// Writing the output document failed.
    #[error("failed to write XML: {0}")]
    Write(String),
    /// The parsed outline breaks the contour grammar or a field invariant.
    #[error(transparent)]
    Outline(#[from] OutlineError),
}
