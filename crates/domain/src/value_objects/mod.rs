//! Validated value objects.

mod names;
mod price;

pub use names::{CategoryName, ProductName};
pub use price::{Price, MAX_PRICE, PROMOTIONAL_PRICE_CAP};
