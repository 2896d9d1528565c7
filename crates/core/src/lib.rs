//! `catalog-core` — product catalog domain building blocks.
//!
//! This crate contains **pure domain** logic (no IO, no HTTP, no storage
//! concerns): the `Product` entity, boundary validation for incoming product
//! payloads, and the in-memory `Catalog` store.

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::{DomainError, DomainResult};
pub use product::{Product, ProductDraft};
