//! Catalog services.
//!
//! Stateless components over the store ports. Each service takes its
//! collaborators as `Arc<dyn Trait>` so any adapter, real or mocked, fits.

pub mod category;
pub mod error;
pub mod product;

pub use category::CategoryService;
pub use error::CatalogError;
pub use product::{Discount, ProductService};
