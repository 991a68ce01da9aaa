//! Validated name newtypes for catalog entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits (product names: 2-150 characters)
//!
//! Length limits count `char`s, not bytes - names are Portuguese text and
//! routinely carry accented characters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length for product names
const MIN_PRODUCT_NAME_CHARS: usize = 2;

/// Maximum length for product names
const MAX_PRODUCT_NAME_CHARS: usize = 150;

/// Marker substring that flags a product as promotional
const PROMOTIONAL_MARKER: &str = "promoção";

// ============================================================================
// CategoryName
// ============================================================================

/// A validated category name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new validated category name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Category name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> String {
        name.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ProductName
// ============================================================================

/// A validated product name (trimmed, 2-150 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Create a new validated product name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name is shorter than 2 or longer than 150 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Product name cannot be empty"));
        }
        let chars = trimmed.chars().count();
        if !(MIN_PRODUCT_NAME_CHARS..=MAX_PRODUCT_NAME_CHARS).contains(&chars) {
            return Err(DomainError::validation(format!(
                "Product name must be between {} and {} characters",
                MIN_PRODUCT_NAME_CHARS, MAX_PRODUCT_NAME_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name flags the product as promotional.
    ///
    /// Promotional products carry "promoção" anywhere in their name,
    /// compared case-insensitively.
    pub fn is_promotional(&self) -> bool {
        self.0.to_lowercase().contains(PROMOTIONAL_MARKER)
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> String {
        name.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod category_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = CategoryName::new("Informática").unwrap();
            assert_eq!(name.as_str(), "Informática");
            assert_eq!(name.to_string(), "Informática");
        }

        #[test]
        fn empty_name_rejected() {
            let result = CategoryName::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            let result = CategoryName::new("   ");
            assert!(result.is_err());
        }

        #[test]
        fn name_is_trimmed() {
            let name = CategoryName::new("  Eletrodomésticos  ").unwrap();
            assert_eq!(name.as_str(), "Eletrodomésticos");
        }

        #[test]
        fn try_from_string() {
            let name: CategoryName = "Livros".to_string().try_into().unwrap();
            assert_eq!(name.as_str(), "Livros");
        }
    }

    mod product_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = ProductName::new("Notebook").unwrap();
            assert_eq!(name.as_str(), "Notebook");
        }

        #[test]
        fn empty_name_rejected() {
            let result = ProductName::new("");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("cannot be empty"));
        }

        #[test]
        fn single_char_rejected() {
            let result = ProductName::new("X");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("between 2 and 150"));
        }

        #[test]
        fn two_chars_accepted() {
            let name = ProductName::new("TV").unwrap();
            assert_eq!(name.as_str(), "TV");
        }

        #[test]
        fn max_length_accepted() {
            let name = ProductName::new("a".repeat(150)).unwrap();
            assert_eq!(name.as_str().chars().count(), 150);
        }

        #[test]
        fn too_long_rejected() {
            let result = ProductName::new("a".repeat(151));
            assert!(result.is_err());
        }

        #[test]
        fn length_counts_chars_not_bytes() {
            // 150 accented chars exceed 150 bytes but are a valid name
            let name = ProductName::new("ç".repeat(150)).unwrap();
            assert_eq!(name.as_str().chars().count(), 150);
        }

        #[test]
        fn name_is_trimmed() {
            let name = ProductName::new("  Mouse sem fio  ").unwrap();
            assert_eq!(name.as_str(), "Mouse sem fio");
        }

        #[test]
        fn promotional_marker_detected() {
            assert!(ProductName::new("Notebook Promoção").unwrap().is_promotional());
            assert!(ProductName::new("PROMOÇÃO relâmpago").unwrap().is_promotional());
            assert!(ProductName::new("promoção").unwrap().is_promotional());
        }

        #[test]
        fn plain_name_is_not_promotional() {
            assert!(!ProductName::new("Notebook").unwrap().is_promotional());
        }
    }
}
