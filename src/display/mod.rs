//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod category;
pub mod preferences;

pub use category::{format_category_list, format_palette};
pub use preferences::format_preferences;
