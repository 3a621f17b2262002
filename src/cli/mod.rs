//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod settings;

pub use category::{handle_category_command, CategoryCommands};
pub use settings::{handle_settings_command, PreferenceField, SettingsCommands};
