//! Command line interface for the slabikar outline converter
//!
//! Every conversion reads one document and writes its results next to the
//! input file. Layout flags override `settings.json`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Slabikar CLI arguments
///
/// Examples:
///   slabikar glif2svg a.glif                # Writes a.svg
///   slabikar svg2glif a.svg --name a        # Writes a_out3.svg and a_out3.glif
///   slabikar ufo2svg Slabikar.ufo a         # Writes a.svg next to the UFO
///   slabikar -v --separate-paths glif2svg a.glif
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "slabikar",
    version,
    about = "Convert glyph outlines between glif, SVG and UFO",
    long_about = "Converts glyph outlines between the UFO glif format and SVG path markup. Every document is validated against the contour grammar before anything is written."
)]
pub struct CliArgs {
    /// More log output (-v info, -vv debug). RUST_LOG overrides this.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write the log to the config directory
    #[clap(long = "log-file", global = true)]
    pub log_file: bool,

    #[clap(flatten)]
    pub settings: SettingsArgs,

    #[clap(subcommand)]
    pub command: Command,
}

/// Overrides for the conversion settings
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SettingsArgs {
    /// Height of the SVG canvas used for the y flip
    #[clap(long = "canvas-height", global = true)]
    pub canvas_height: Option<f64>,

    /// Stroke width of unfilled SVG paths
    #[clap(long = "stroke-width", global = true)]
    pub stroke_width: Option<f64>,

    /// Write one SVG path per contour
    #[clap(long = "separate-paths", global = true)]
    pub separate_paths: bool,

    /// Do not fill the combined SVG path
    #[clap(long = "no-fill", global = true)]
    pub no_fill: bool,

    /// Scale factor applied to every outline after reading it
    #[clap(long = "scale", global = true)]
    pub scale: Option<f64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert a .glif file to a sibling .svg
    #[clap(name = "glif2svg")]
    Glif2svg {
        /// Input glif file
        file: PathBuf,
    },
    /// Convert an SVG to sibling `_out3.svg` and `_out3.glif` files
    #[clap(name = "svg2glif")]
    Svg2glif {
        /// Input SVG file
        file: PathBuf,
        /// Glyph name, defaults to the file stem
        #[clap(long = "name", short = 'n')]
        name: Option<String>,
    },
    /// Write one glyph of a UFO source as SVG next to the UFO
    #[clap(name = "ufo2svg")]
    Ufo2svg {
        /// UFO directory
        ufo: PathBuf,
        /// Glyph name in the default layer
        glyph: String,
    },
    /// Print a .glif or .svg outline as JSON with its bounding box
    Inspect {
        /// Input file
        file: PathBuf,
    },
    /// Create settings.json in the config directory
    InitConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_flags() {
        let args = CliArgs::try_parse_from([
            "slabikar",
            "-vv",
            "svg2glif",
            "a.svg",
            "--name",
            "a",
            "--no-fill",
            "--stroke-width",
            "16",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.log_file);
        assert_eq!(
            args.command,
            Command::Svg2glif {
                file: PathBuf::from("a.svg"),
                name: Some("a".to_string())
            }
        );
        assert!(args.settings.no_fill);
        assert_eq!(args.settings.stroke_width, Some(16.0));
        assert_eq!(args.settings.canvas_height, None);
    }

    #[test]
    fn wrong_argument_count_is_an_error() {
        assert!(CliArgs::try_parse_from(["slabikar", "glif2svg"]).is_err());
        assert!(CliArgs::try_parse_from(["slabikar", "glif2svg", "a.glif", "b.glif"]).is_err());
        assert!(CliArgs::try_parse_from(["slabikar"]).is_err());
    }

    #[test]
    fn init_config_takes_no_arguments() {
        let args = CliArgs::try_parse_from(["slabikar", "init-config"]).unwrap();
        assert_eq!(args.command, Command::InitConfig);
        assert_eq!(args.settings, SettingsArgs::default());
    }
}
