//! Category registry
//!
//! Holds the expense and income collections, restores them from the
//! key-value store and appends user-defined entries.

use tracing::{debug, info, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, CategoryKind};
use crate::storage::KeyValueStore;

/// Registry of expense and income categories
///
/// Starts out holding the compiled-in defaults; `initialize` replaces each
/// collection with its persisted value when one can be read.
pub struct CategoryRegistry<'a, S> {
    store: &'a S,
    expense: Vec<Category>,
    income: Vec<Category>,
}

impl<'a, S: KeyValueStore> CategoryRegistry<'a, S> {
    /// Create a registry holding the defaults for both kinds
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            expense: CategoryKind::Expense.defaults(),
            income: CategoryKind::Income.defaults(),
        }
    }

    /// Create a registry and load both collections from the store
    pub async fn load(store: &'a S) -> Self {
        let mut registry = Self::new(store);
        registry.initialize().await;
        registry
    }

    /// Load both collections from the store
    ///
    /// A missing key, a failed read and unparseable data all fall back to the
    /// defaults. Nothing is surfaced to the caller.
    pub async fn initialize(&mut self) {
        for &kind in CategoryKind::all() {
            let loaded = self.read_collection(kind).await;
            *self.collection_mut(kind) = loaded;
        }
    }

    async fn read_collection(&self, kind: CategoryKind) -> Vec<Category> {
        let key = kind.storage_key();

        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no saved categories, using defaults");
                return kind.defaults();
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read categories, using defaults");
                return kind.defaults();
            }
        };

        match serde_json::from_str::<Vec<Category>>(&raw) {
            Ok(categories) => categories,
            Err(e) => {
                let err = TallyError::StorageRead(format!("Failed to parse {}: {}", key, e));
                warn!(key, error = %err, "ignoring saved categories, using defaults");
                kind.defaults()
            }
        }
    }

    /// Categories of `kind` in insertion order
    pub fn list_categories(&self, kind: CategoryKind) -> &[Category] {
        match kind {
            CategoryKind::Expense => &self.expense,
            CategoryKind::Income => &self.income,
        }
    }

    fn collection_mut(&mut self, kind: CategoryKind) -> &mut Vec<Category> {
        match kind {
            CategoryKind::Expense => &mut self.expense,
            CategoryKind::Income => &mut self.income,
        }
    }

    /// Append a category and persist the whole collection
    ///
    /// The name is trimmed. Duplicates are accepted. If the write fails the
    /// collection is left as it was and `StorageWrite` is returned.
    pub async fn add_category(
        &mut self,
        kind: CategoryKind,
        name: &str,
        icon: &str,
        color: &str,
    ) -> TallyResult<&[Category]> {
        let category = Category::new(name.trim(), icon.trim(), color.trim());
        category.validate()?;

        let mut updated = self.list_categories(kind).to_vec();
        updated.push(category);

        let key = kind.storage_key();
        let json = serde_json::to_string(&updated)?;

        if let Err(e) = self.store.set(key, json).await {
            warn!(key, error = %e, "failed to save categories");
            return Err(match e {
                TallyError::StorageWrite(msg) => TallyError::StorageWrite(msg),
                other => TallyError::StorageWrite(other.to_string()),
            });
        }

        info!(key, count = updated.len(), "saved categories");
        *self.collection_mut(kind) = updated;

        Ok(self.list_categories(kind))
    }

    /// Categories of `kind` whose name contains `query`, ignoring case
    pub fn search(&self, kind: CategoryKind, query: &str) -> Vec<&Category> {
        let query = query.trim();
        self.list_categories(kind)
            .iter()
            .filter(|c| c.matches(query))
            .collect()
    }
}
