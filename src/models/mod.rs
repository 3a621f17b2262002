//! Core data models for Tally
//!
//! This module contains the data structures persisted on the device:
//! expense/income categories and user preferences.

pub mod category;
pub mod preferences;

pub use category::{
    Category, CategoryKind, CategoryValidationError, AVAILABLE_COLORS, AVAILABLE_ICONS,
};
pub use preferences::{BudgetPeriod, Preferences, Theme, SUPPORTED_LANGUAGES};
