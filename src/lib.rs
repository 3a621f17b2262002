//! Tally - device-side state for a personal-finance app
//!
//! This library keeps the state a finance app holds on the device itself:
//! user-extensible expense and income categories, and the preferences from
//! the settings screen. Both persist to a string-keyed async store.
//!
//! # Architecture
//!
//! - `config`: Data directory and application settings
//! - `error`: Custom error types
//! - `models`: Categories, category kinds and preferences
//! - `storage`: The `KeyValueStore` trait with memory and JSON-file backends
//! - `services`: `CategoryRegistry` and `PreferencesService`
//! - `cli` / `display`: The `tally` command-line front-end
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::models::CategoryKind;
//! use tally::services::CategoryRegistry;
//! use tally::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut registry = CategoryRegistry::load(&store).await;
//! registry.add_category(CategoryKind::Expense, "Pets", "paw", "#AF52DE").await?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
