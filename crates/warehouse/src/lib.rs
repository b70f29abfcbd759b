//! Warehouse: the in-memory collection owning all product records.
//!
//! Pure in-process data structure; persistence and transport are external
//! collaborators that consume this API.

pub mod warehouse;

pub use warehouse::Warehouse;
