//! Geometric primitives and glyph construction

pub mod hobby;
pub mod pen;
pub mod utilities;

// Re-export commonly used items
pub use hobby::{control_points, control_points_with_tensions, MIN_TENSION};
pub use pen::{closed_path, open_path, Knot, Segment, SplinePen};
pub use utilities::{dir, whatever_y};
