//! Port traits for infrastructure boundaries.
//!
//! The store ports are the only abstractions in this crate; everything else
//! is concrete types. They exist so the persistence engine can be swapped
//! (in-memory now, a database later) without touching the services.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{CategoryRepo, ProductRepo};

// Test-only mock stores (only available during test builds)
#[cfg(test)]
pub use repos::{MockCategoryRepo, MockProductRepo};
