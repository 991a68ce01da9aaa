//! In-memory store adapters.
//!
//! Concurrent-map implementations of the store ports, suitable for tests
//! and for embedding the services without an external database.

mod category_repo;
mod product_repo;

pub use category_repo::MemoryCategoryRepo;
pub use product_repo::MemoryProductRepo;
