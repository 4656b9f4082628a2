//! Application configuration management
//!
//! Conversion settings come from three layers, lowest priority first:
//! built-in defaults, the user's `settings.json`, and CLI flags.

pub mod user_config;

pub use user_config::ConfigFile;
