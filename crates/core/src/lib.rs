//! Catalog service core.
//!
//! Category and product services over pluggable store ports, plus in-memory
//! adapters for those ports. Transport layers sit on top of this crate;
//! nothing here knows about HTTP or a concrete database.

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::memory::{MemoryCategoryRepo, MemoryProductRepo};
pub use infrastructure::ports::{CategoryRepo, ProductRepo, RepoError};
pub use use_cases::{CatalogError, CategoryService, Discount, ProductService};
