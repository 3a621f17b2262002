//! Storage layer for Tally
//!
//! Everything the app persists goes through a string-keyed, string-valued
//! store with async access. Two backends are provided: an in-memory map and a
//! JSON file with atomic writes.

pub mod file_io;
pub mod json_store;
pub mod memory;

use std::future::Future;

pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::TallyResult;

/// Durable key-value store accessed by string key
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> impl Future<Output = TallyResult<Option<String>>> + Send;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: String) -> impl Future<Output = TallyResult<()>> + Send;

    /// Delete `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> impl Future<Output = TallyResult<()>> + Send;
}
