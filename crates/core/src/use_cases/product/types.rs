//! Read models returned by the product service.

use serde::{Deserialize, Serialize};

/// Result of a discount simulation. Nothing is persisted; the caller gets
/// the original price, the applied label and the rounded final price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub name: String,
    pub original_price: f64,
    pub discount_label: String,
    pub final_price: f64,
}
