//! Application runner logic
//!
//! Reads the input document, applies the settings and writes the results.
//! Every step is fail-fast: nothing is written unless the whole document
//! converted.

use crate::core::cli::{CliArgs, Command};
use crate::core::config::ConfigFile;
use crate::core::settings::ConversionSettings;
use crate::data::{parse_glif, parse_svg, ufo, write_glif, write_svg};
use crate::font_source::smooth::{tangent_breaks, DEFAULT_TOLERANCE};
use crate::font_source::GlyphOutline;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Suffix of the files written by `svg2glif`
pub const ROUND_TRIP_SUFFIX: &str = "_out3";

/// Run the command given on the command line.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.command == Command::InitConfig {
        return init_config(&ConfigFile::config_path());
    }

    let config = ConfigFile::load();
    let settings = ConversionSettings::resolve(config.as_ref(), &cli_args.settings);
    execute(&cli_args.command, &settings)
}

/// Run a conversion command with already resolved settings.
pub fn execute(command: &Command, settings: &ConversionSettings) -> Result<()> {
    match command {
        Command::Glif2svg { file } => {
            glif_to_svg(file, settings)?;
        }
        Command::Svg2glif { file, name } => {
            svg_to_glif(file, name.as_deref(), settings)?;
        }
        Command::Ufo2svg { ufo, glyph } => {
            ufo_to_svg(ufo, glyph, settings)?;
        }
        Command::Inspect { file } => {
            println!("{}", inspect(file, settings)?);
        }
        Command::InitConfig => init_config(&ConfigFile::config_path())?,
    }
    Ok(())
}

/// Convert a glif file to a sibling `.svg`.
pub fn glif_to_svg(path: &Path, settings: &ConversionSettings) -> Result<PathBuf> {
    let glyph = prepare(read_glif(path)?, settings);
    let output = path.with_extension("svg");
    let svg = write_svg(&glyph, &settings.svg_options())
        .with_context(|| format!("Failed to convert {} to SVG", path.display()))?;
    write_output(&output, &svg)?;
    Ok(output)
}

/// Convert an SVG file to sibling `<stem>_out3.svg` and `<stem>_out3.glif`
/// files. The glyph name defaults to the file stem.
pub fn svg_to_glif(
    path: &Path,
    name: Option<&str>,
    settings: &ConversionSettings,
) -> Result<(PathBuf, PathBuf)> {
    let stem = file_stem(path)?;
    let name = name.unwrap_or(&stem);
    let glyph = prepare(read_svg(path, name)?, settings);

    let svg_output = path.with_file_name(format!("{stem}{ROUND_TRIP_SUFFIX}.svg"));
    let svg = write_svg(&glyph, &settings.svg_options())
        .with_context(|| format!("Failed to convert {} to SVG", path.display()))?;
    write_output(&svg_output, &svg)?;

    let glif_output = path.with_file_name(format!("{stem}{ROUND_TRIP_SUFFIX}.glif"));
    let glif = write_glif(&glyph)
        .with_context(|| format!("Failed to convert {} to glif", path.display()))?;
    write_output(&glif_output, &glif)?;

    Ok((svg_output, glif_output))
}

/// Write one glyph of a UFO as `<glyph>.svg` in the directory holding the UFO.
pub fn ufo_to_svg(ufo_path: &Path, glyph_name: &str, settings: &ConversionSettings) -> Result<PathBuf> {
    let glyph = prepare(ufo::load_glyph(ufo_path, glyph_name)?, settings);
    let output = ufo_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{glyph_name}.svg"));
    let svg = write_svg(&glyph, &settings.svg_options())
        .with_context(|| format!("Failed to convert glyph '{glyph_name}' to SVG"))?;
    write_output(&output, &svg)?;
    Ok(output)
}

#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    outline: &'a GlyphOutline,
    point_count: usize,
    /// `[x_min, y_min, x_max, y_max]`
    bounding_box: Option<[f64; 4]>,
}

/// The outline of a `.glif` or `.svg` file as pretty-printed JSON.
pub fn inspect(path: &Path, settings: &ConversionSettings) -> Result<String> {
    let glyph = match path.extension().and_then(|e| e.to_str()) {
        Some("glif") => read_glif(path)?,
        Some("svg") => read_svg(path, &file_stem(path)?)?,
        _ => bail!(
            "Cannot inspect {}: expected a .glif or .svg file",
            path.display()
        ),
    };
    let glyph = prepare(glyph, settings);
    let report = InspectReport {
        outline: &glyph,
        point_count: glyph.point_count(),
        bounding_box: glyph
            .bounding_box()
            .map(|bbox| [bbox.x0, bbox.y0, bbox.x1, bbox.y1]),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Create the settings file at `path` unless one exists.
pub fn init_config(path: &Path) -> Result<()> {
    if ConfigFile::initialize(path)? {
        info!("Created settings file: {}", path.display());
    } else {
        info!("Settings file already exists: {}", path.display());
    }
    Ok(())
}

fn read_glif(path: &Path) -> Result<GlyphOutline> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_glif(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_svg(path: &Path, name: &str) -> Result<GlyphOutline> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_svg(&text, name).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Apply the scale and report smooth points that are not smooth.
fn prepare(glyph: GlyphOutline, settings: &ConversionSettings) -> GlyphOutline {
    let glyph = if settings.scale == 1.0 {
        glyph
    } else {
        glyph.scaled(settings.scale)
    };
    for (index, contour) in glyph.contours.iter().enumerate() {
        for point in tangent_breaks(contour, DEFAULT_TOLERANCE) {
            warn!(
                "Glyph '{}': contour {}, point {} is marked smooth but has a corner",
                glyph.name, index, point
            );
        }
    }
    glyph
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
