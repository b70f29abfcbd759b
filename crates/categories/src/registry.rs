use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use warehouse_core::{DomainError, DomainResult};

use crate::category::{Category, normalize};

/// Deduplicating cache of [`Category`] values.
///
/// Injectable object rather than a hidden static: collaborators receive a
/// reference to the registry they should resolve categories against, and
/// independent registries stay fully isolated (each test builds its own).
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    cache: RwLock<HashMap<String, Category>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical category for `name`, created on first use.
    ///
    /// Fails with [`DomainError::Validation`] when `name` is empty or
    /// whitespace-only. The whole probe runs under the write lock, so
    /// concurrent first requests for one normalized name still end with a
    /// single cached value.
    pub fn of(&self, name: &str) -> DomainResult<Category> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be blank"));
        }

        let normalized = normalize(name);

        let mut cache = self.lock_cache_mut();
        if let Some(existing) = cache.get(&normalized) {
            return Ok(existing.clone());
        }

        debug!(category = %normalized, "caching new category");
        let category = Category::new(normalized.clone());
        cache.insert(normalized, category.clone());
        Ok(category)
    }

    /// Number of distinct cached categories.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The cache only ever grows by whole entries, so data behind a poisoned
    // lock is still consistent and the lock can be recovered.
    fn lock_cache_mut(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Category>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
