//! Catálogo domain types.
//!
//! Entities, validated value objects, and the domain error type. This crate
//! holds no I/O and no async: everything here is valid by construction, and
//! the service layer in `catalogo-core` enforces the cross-record invariants
//! (uniqueness, referential integrity, promotional pricing) on top of it.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Category, NewCategory, NewProduct, Product};
pub use error::DomainError;
pub use ids::{CategoryId, ProductId};
pub use value_objects::{CategoryName, Price, ProductName, MAX_PRICE, PROMOTIONAL_PRICE_CAP};
