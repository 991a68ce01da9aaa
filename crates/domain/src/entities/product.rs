//! Product entity - a priced, named item belonging to exactly one category.

use serde::{Deserialize, Serialize};

use crate::entities::Category;
use crate::ids::ProductId;
use crate::value_objects::{Price, ProductName};

/// A stored product.
///
/// The product embeds a snapshot of its category taken at create/update
/// time. Later changes to the category do not propagate: deleting it neither
/// deletes nor reassigns the product, and renaming it leaves existing
/// products reading the old name until their next update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub category: Category,
}

impl Product {
    pub fn new(id: ProductId, name: ProductName, price: Price, category: Category) -> Self {
        Self {
            id,
            name,
            price,
            category,
        }
    }
}

/// A product record to persist.
///
/// Carries no category: the service resolves the category id and attaches
/// the stored record. `id` follows the same policy as [`NewCategory`]:
/// optional on create, forced to the path id on update.
///
/// [`NewCategory`]: crate::entities::NewCategory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: ProductName,
    pub price: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use crate::value_objects::CategoryName;

    #[test]
    fn new_product_deserializes_without_id() {
        let new: NewProduct =
            serde_json::from_str(r#"{"name":"Notebook","price":3500.0}"#).unwrap();
        assert!(new.id.is_none());
        assert_eq!(new.price.amount(), 3500.0);
    }

    #[test]
    fn invalid_price_fails_deserialization() {
        let result = serde_json::from_str::<NewProduct>(r#"{"name":"Notebook","price":10000.01}"#);
        assert!(result.is_err());
    }

    #[test]
    fn product_embeds_its_category() {
        let category = Category::new(CategoryId::new(1), CategoryName::new("Informática").unwrap());
        let product = Product::new(
            ProductId::new(10),
            ProductName::new("Notebook").unwrap(),
            Price::new(3500.0).unwrap(),
            category.clone(),
        );
        assert_eq!(product.category, category);
    }
}
