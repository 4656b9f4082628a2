//! Slabikar
//!
//! Glyph outlines for a cursive font: contour construction from
//! Metafont-style paths, the contour grammar, and conversion between glif,
//! SVG and UFO.
pub mod core;
pub mod data;
pub mod font_source;
pub mod geometry;
pub mod logging;
