//! Core application functionality
//!
//! This module contains the command-line side of the converter:
//! - CLI parsing
//! - User configuration and resolved settings
//! - Command dispatch and error exit

pub mod cli;
pub mod config;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use runner::run_app;
pub use settings::ConversionSettings;
