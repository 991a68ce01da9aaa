//! Validated price value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum allowed price for any product
pub const MAX_PRICE: f64 = 10_000.00;

/// Promotional products must be priced strictly below this cap
pub const PROMOTIONAL_PRICE_CAP: f64 = 500.00;

/// A validated product price (finite, `0.00..=10_000.00`)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a new validated price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the amount is not a finite,
    /// non-negative number of at most 10 000.00.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::validation("Price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("Price cannot be negative"));
        }
        if amount > MAX_PRICE {
            return Err(DomainError::validation(format!(
                "Price cannot exceed {:.2}",
                MAX_PRICE
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the amount as a plain float.
    pub fn amount(self) -> f64 {
        self.0
    }

    /// Whether this price satisfies the promotional cap (`< 500.00`).
    pub fn within_promotional_cap(self) -> bool {
        self.0 < PROMOTIONAL_PRICE_CAP
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}
