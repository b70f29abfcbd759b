use std::sync::Arc;

use serde::{Deserialize, Serialize};

use warehouse_core::ValueObject;

/// Canonical product category.
///
/// Obtained through [`CategoryRegistry::of`]; clones share one backing
/// allocation per normalized name, so a registry never hands out duplicates
/// (flyweight). Equality and hashing go by the normalized name, which keeps
/// categories from independent registries comparable by value.
///
/// [`CategoryRegistry::of`]: crate::CategoryRegistry::of
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    pub(crate) fn new(normalized: String) -> Self {
        Self {
            name: normalized.into(),
        }
    }

    /// The normalized category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when `other` shares this category's backing allocation.
    ///
    /// Holds for any two values a single registry returned for the same
    /// normalized name.
    pub fn shares_allocation(&self, other: &Category) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Normalize a category name: upper-case the first character, leave the rest
/// unchanged. No trimming.
pub(crate) fn normalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
