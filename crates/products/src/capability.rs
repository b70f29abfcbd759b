//! Product capabilities.
//!
//! Cross-cutting behaviors a product variant may opt into. Filtering the
//! warehouse for "everything shippable" is a capability query against these
//! traits, never an inspection of the concrete variant.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

/// Capability: the product has an expiration date and can be checked for
/// expiry.
pub trait Perishable {
    /// The stored expiration date.
    fn expiration_date(&self) -> NaiveDate;

    /// True once `today` has reached the expiration date.
    fn is_expired_on(&self, today: NaiveDate) -> bool {
        today >= self.expiration_date()
    }

    /// Expiry check against the current UTC date.
    fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }
}

/// Capability: the product has a weight and a computed shipping cost.
pub trait Shippable {
    /// Shipping weight in kilograms. Never negative.
    fn weight(&self) -> Decimal;

    /// Cost of shipping this product, per the variant's rate rules.
    fn shipping_cost(&self) -> Decimal;
}
