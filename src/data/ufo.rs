//! UFO file I/O operations

use crate::font_source::GlyphOutline;
use anyhow::{Context, Result};
use norad::Font;
use std::path::Path;

/// Load one glyph from the default layer of a UFO source on disk.
pub fn load_glyph(path: impl AsRef<Path>, glyph_name: &str) -> Result<GlyphOutline> {
    let path = path.as_ref();
    let font =
        Font::load(path).with_context(|| format!("Failed to load UFO {}", path.display()))?;
    let glyph = font
        .default_layer()
        .get_glyph(glyph_name)
        .with_context(|| format!("No glyph '{}' in {}", glyph_name, path.display()))?;
    let outline = GlyphOutline::from_norad_glyph(glyph)
        .with_context(|| format!("Glyph '{}' in {}", glyph_name, path.display()))?;
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::{Contour, UfoPoint};

    #[test]
    fn load_glyph_from_saved_font() {
        let dir = tempfile::tempdir().unwrap();
        let ufo = dir.path().join("Test.ufo");

        let outline = GlyphOutline {
            advance_width: Some(300.0),
            unicode_hex: Some("0069".to_string()),
            contours: vec![Contour::new(vec![
                UfoPoint::line_to(0.0, 0.0),
                UfoPoint::line_to(100.0, 0.0),
                UfoPoint::line_to(100.0, 400.0),
            ])],
            ..GlyphOutline::new("i")
        };
        let mut font = Font::new();
        font.default_layer_mut()
            .insert_glyph(outline.to_norad_glyph().unwrap());
        font.save(&ufo).unwrap();

        assert_eq!(load_glyph(&ufo, "i").unwrap(), outline);

        let missing = load_glyph(&ufo, "j").unwrap_err();
        assert!(missing.to_string().contains("No glyph 'j'"));
    }

    #[test]
    fn missing_font() {
        let err = load_glyph("/nonexistent/Nothing.ufo", "a").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load UFO"));
    }
}
