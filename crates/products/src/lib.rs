//! Products domain module.
//!
//! This crate contains the product variants and their capabilities,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod capability;
pub mod product;

pub use capability::{Perishable, Shippable};
pub use product::{ElectronicsProduct, FoodProduct, Product};
