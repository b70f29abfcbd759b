use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use warehouse_categories::Category;
use warehouse_core::{DomainError, DomainResult, Entity, ProductId};

use crate::capability::{Perishable, Shippable};

/// Electronics shipping: base rate per kilogram.
const ELECTRONICS_BASE_RATE: i64 = 79;
/// Electronics shipping: surcharge per kilogram above the weight threshold.
const ELECTRONICS_OVERWEIGHT_SURCHARGE: i64 = 49;
/// Electronics shipping: threshold in kilograms, inclusive on the low side.
const ELECTRONICS_WEIGHT_THRESHOLD_KG: i64 = 5;
/// Food shipping: flat rate per kilogram.
const FOOD_RATE: i64 = 50;

/// Entity: electronics product. Shippable, never perishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicsProduct {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
    warranty_months: u32,
    weight: Decimal,
}

impl ElectronicsProduct {
    /// Create an electronics product.
    ///
    /// Fails with [`DomainError::Validation`] on a negative price or weight.
    /// Warranty months are non-negative by construction of the type.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        warranty_months: u32,
        weight: Decimal,
    ) -> DomainResult<Self> {
        validate_amounts(price, weight)?;
        Ok(Self {
            id,
            name: name.into(),
            category,
            price,
            warranty_months,
            weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicsProduct {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Shippable for ElectronicsProduct {
    fn weight(&self) -> Decimal {
        self.weight
    }

    fn shipping_cost(&self) -> Decimal {
        let rate = if self.weight > Decimal::from(ELECTRONICS_WEIGHT_THRESHOLD_KG) {
            Decimal::from(ELECTRONICS_BASE_RATE + ELECTRONICS_OVERWEIGHT_SURCHARGE)
        } else {
            Decimal::from(ELECTRONICS_BASE_RATE)
        };
        self.weight * rate
    }
}

/// Entity: food product. Perishable and shippable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodProduct {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
    expiry_date: NaiveDate,
    weight: Decimal,
}

impl FoodProduct {
    /// Create a food product.
    ///
    /// Fails with [`DomainError::Validation`] on a negative price or weight.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        expiry_date: NaiveDate,
        weight: Decimal,
    ) -> DomainResult<Self> {
        validate_amounts(price, weight)?;
        Ok(Self {
            id,
            name: name.into(),
            category,
            price,
            expiry_date,
            weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }
}

impl Entity for FoodProduct {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Perishable for FoodProduct {
    fn expiration_date(&self) -> NaiveDate {
        self.expiry_date
    }
}

impl Shippable for FoodProduct {
    fn weight(&self) -> Decimal {
        self.weight
    }

    fn shipping_cost(&self) -> Decimal {
        self.weight * Decimal::from(FOOD_RATE)
    }
}

/// A product record: closed set of kind-specific variants.
///
/// Common attributes are reachable through the accessors below; kind-specific
/// behavior is reached through the capability queries ([`Product::perishable`],
/// [`Product::shippable`]) so callers never match on the concrete variant to
/// filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Product {
    Electronics(ElectronicsProduct),
    Food(FoodProduct),
}

impl Product {
    pub fn id(&self) -> ProductId {
        match self {
            Product::Electronics(p) => p.id,
            Product::Food(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Electronics(p) => &p.name,
            Product::Food(p) => &p.name,
        }
    }

    pub fn category(&self) -> &Category {
        match self {
            Product::Electronics(p) => &p.category,
            Product::Food(p) => &p.category,
        }
    }

    pub fn price(&self) -> Decimal {
        match self {
            Product::Electronics(p) => p.price,
            Product::Food(p) => p.price,
        }
    }

    /// Update the price in place.
    ///
    /// The non-negative price invariant holds on every mutation path, not
    /// only at construction, so a negative price fails with
    /// [`DomainError::Validation`].
    pub fn set_price(&mut self, price: Decimal) -> DomainResult<()> {
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }
        match self {
            Product::Electronics(p) => p.price = price,
            Product::Food(p) => p.price = price,
        }
        Ok(())
    }

    /// Perishable capability, if this variant carries it.
    pub fn perishable(&self) -> Option<&dyn Perishable> {
        match self {
            Product::Electronics(_) => None,
            Product::Food(p) => Some(p),
        }
    }

    /// Shippable capability, if this variant carries it.
    pub fn shippable(&self) -> Option<&dyn Shippable> {
        match self {
            Product::Electronics(p) => Some(p),
            Product::Food(p) => Some(p),
        }
    }

    /// Human-readable one-line summary.
    pub fn details(&self) -> String {
        match self {
            Product::Electronics(p) => {
                format!(
                    "Electronics: {}, Warranty: {} months",
                    p.name, p.warranty_months
                )
            }
            Product::Food(p) => format!("Food: {}, Expires: {}", p.name, p.expiry_date),
        }
    }
}

impl From<ElectronicsProduct> for Product {
    fn from(value: ElectronicsProduct) -> Self {
        Product::Electronics(value)
    }
}

impl From<FoodProduct> for Product {
    fn from(value: FoodProduct) -> Self {
        Product::Food(value)
    }
}

fn validate_amounts(price: Decimal, weight: Decimal) -> DomainResult<()> {
    if price < Decimal::ZERO {
        return Err(DomainError::validation("price cannot be negative"));
    }
    if weight < Decimal::ZERO {
        return Err(DomainError::validation("weight cannot be negative"));
    }
    Ok(())
}
