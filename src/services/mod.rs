//! Service layer for Tally
//!
//! The service layer provides business logic on top of the key-value store,
//! handling validation, defaults and the persistence policy of each component.

pub mod category;
pub mod preferences;

pub use category::CategoryRegistry;
pub use preferences::PreferencesService;
