use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use warehouse_categories::Category;
use warehouse_core::{DomainError, DomainResult, ProductId};
use warehouse_products::Product;

/// The authoritative in-memory collection of product records.
///
/// One instance per process by convention: construct it once and pass it by
/// reference to every collaborator that needs it (no hidden global; each test
/// builds its own isolated warehouse). Insertion order is preserved for
/// iteration and for every derived view.
///
/// Mutations take the write lock and snapshot reads take the read lock, so a
/// reader never observes a partially-applied mutation.
#[derive(Debug, Default)]
pub struct Warehouse {
    products: RwLock<Vec<Product>>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the collection.
    ///
    /// Fails with [`DomainError::Conflict`] when a product with the same id
    /// is already present; the collection is left untouched in that case.
    pub fn add(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write();
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id()
            )));
        }
        debug!(product_id = %product.id(), "adding product");
        products.push(product);
        Ok(())
    }

    /// Snapshot of all products, insertion order.
    ///
    /// The snapshot is an independent copy: later mutations (including
    /// [`Warehouse::clear`]) do not reach into it.
    pub fn products(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// The product with `id`, if present.
    pub fn product_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id() == id).cloned()
    }

    /// Update a product's price in place.
    ///
    /// Fails with [`DomainError::NotFound`] when no product has `id`, and
    /// with [`DomainError::Validation`] on a negative price. No other
    /// attribute changes.
    pub fn update_price(&self, id: ProductId, new_price: Decimal) -> DomainResult<()> {
        let mut products = self.write();
        let product = products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(DomainError::NotFound)?;
        product.set_price(new_price)?;
        debug!(product_id = %id, price = %new_price, "updated price");
        Ok(())
    }

    /// Remove the product with `id`, reporting whether anything was removed.
    ///
    /// Removing an absent id is a no-op, not an error.
    pub fn remove(&self, id: ProductId) -> bool {
        let mut products = self.write();
        let before = products.len();
        products.retain(|p| p.id() != id);
        let removed = products.len() != before;
        if removed {
            debug!(product_id = %id, "removed product");
        }
        removed
    }

    /// Reset the collection to empty.
    pub fn clear(&self) {
        let mut products = self.write();
        debug!(count = products.len(), "clearing warehouse");
        products.clear();
    }

    /// Products carrying the Perishable capability that are expired as of
    /// `today`, insertion order.
    pub fn expired_products_on(&self, today: NaiveDate) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.perishable().is_some_and(|per| per.is_expired_on(today)))
            .cloned()
            .collect()
    }

    /// Expired products as of the current UTC date.
    pub fn expired_products(&self) -> Vec<Product> {
        self.expired_products_on(Utc::now().date_naive())
    }

    /// Products carrying the Shippable capability, insertion order.
    pub fn shippable_products(&self) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.shippable().is_some())
            .cloned()
            .collect()
    }

    /// Products partitioned by category.
    ///
    /// Groups are created on demand (no empty groups) and preserve per-group
    /// insertion order.
    pub fn grouped_by_category(&self) -> HashMap<Category, Vec<Product>> {
        let products = self.read();
        let mut groups: HashMap<Category, Vec<Product>> = HashMap::new();
        for product in products.iter() {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(product.clone());
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock only means some thread panicked mid-call; every
    // mutation validates before touching the collection, so the data behind
    // the lock is still consistent and the lock can be recovered.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
