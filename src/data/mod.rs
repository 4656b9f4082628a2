//! Readers and writers for outline documents
//!
//! `glif` and `svg` handle the two text formats, `conversions` and `ufo`
//! connect the outline model to norad and kurbo.

pub mod conversions;
pub mod error;
pub mod glif;
pub mod svg;
pub mod svg_path;
pub mod ufo;
mod xml;

pub use error::ConversionError;
pub use glif::{parse_glif, write_glif};
pub use svg::{parse_svg, path_data, write_svg, SvgOptions};
pub use svg_path::parse_path;
pub use xml::format_number;
