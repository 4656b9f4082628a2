//! Glyph outline model
//!
//! This module contains the in-memory form of a glyph (points, contours,
//! anchors) together with the grammar every contour must satisfy before it
//! is serialized.

pub mod data;
pub mod error;
pub mod smooth;
pub mod ufo_point;
pub mod validate;

#[cfg(test)]
mod tests;

// Explicit re-exports for public API
pub use data::{Anchor, Contour, GlyphOutline};
pub use error::{GrammarViolation, OutlineError};
pub use ufo_point::{UfoPoint, UfoPointType};
pub use validate::{code_point, validate_contour, validate_outline, Role};
