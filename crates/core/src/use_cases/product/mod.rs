mod service;
mod types;

pub use service::ProductService;
pub use types::Discount;
