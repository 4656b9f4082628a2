//! Resolved conversion settings

use crate::core::cli::SettingsArgs;
use crate::core::config::ConfigFile;
use crate::data::SvgOptions;

/// Settings after merging defaults, `settings.json` and CLI flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionSettings {
    pub canvas_height: f64,
    pub stroke_width: f64,
    pub separate_paths: bool,
    pub fill: bool,
    /// Applied to every outline after reading; 1.0 leaves it untouched.
    pub scale: f64,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        let svg = SvgOptions::default();
        Self {
            canvas_height: svg.canvas_height,
            stroke_width: svg.stroke_width,
            separate_paths: svg.separate_paths,
            fill: svg.fill,
            scale: 1.0,
        }
    }
}

impl ConversionSettings {
    /// Merge the layers. CLI flags win over the config file, which wins over
    /// the defaults.
    pub fn resolve(config: Option<&ConfigFile>, cli: &SettingsArgs) -> Self {
        let mut settings = Self::default();

        if let Some(config) = config {
            settings.canvas_height = config.canvas_height.unwrap_or(settings.canvas_height);
            settings.stroke_width = config.stroke_width.unwrap_or(settings.stroke_width);
            settings.separate_paths = config.separate_paths.unwrap_or(settings.separate_paths);
            settings.fill = config.fill.unwrap_or(settings.fill);
            settings.scale = config.scale.unwrap_or(settings.scale);
        }

        settings.canvas_height = cli.canvas_height.unwrap_or(settings.canvas_height);
        settings.stroke_width = cli.stroke_width.unwrap_or(settings.stroke_width);
        settings.scale = cli.scale.unwrap_or(settings.scale);
        if cli.separate_paths {
            settings.separate_paths = true;
        }
        if cli.no_fill {
            settings.fill = false;
        }
        settings
    }

    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            canvas_height: self.canvas_height,
            separate_paths: self.separate_paths,
            fill: self.fill,
            stroke_width: self.stroke_width,
        }
    }
}
