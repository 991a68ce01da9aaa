//! Product reads, writes and discount simulation.

use std::sync::Arc;

use catalogo_domain::{Category, CategoryId, NewProduct, Product, ProductId};

use crate::infrastructure::ports::{CategoryRepo, ProductRepo};
use crate::use_cases::error::CatalogError;
use crate::use_cases::product::types::Discount;

const MAX_DISCOUNT_PERCENTAGE: f64 = 50.0;

/// Stateless service over the product store.
///
/// Writes resolve the referenced category up front and persist a snapshot of
/// it with the product. As with categories, uniqueness is check-then-act;
/// the store's constraints close the race.
pub struct ProductService {
    products: Arc<dyn ProductRepo>,
    categories: Arc<dyn CategoryRepo>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepo>, categories: Arc<dyn CategoryRepo>) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.list().await?)
    }

    pub async fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product", id.value()))
    }

    pub async fn search(&self, fragment: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.search_by_name(fragment).await?)
    }

    pub async fn create(
        &self,
        new: NewProduct,
        category_id: CategoryId,
    ) -> Result<Product, CatalogError> {
        if let Some(id) = new.id {
            if self.products.exists(id).await? {
                return Err(CatalogError::conflict("product id already exists"));
            }
        }
        let category = self.resolve_category(category_id).await?;
        if self.products.exists_by_name(new.name.as_str()).await? {
            return Err(CatalogError::conflict(
                "a product with this name already exists",
            ));
        }
        self.enforce_promotional_cap(&new)?;
        let stored = self.products.save(&new, &category).await?;
        tracing::info!(product_id = stored.id.value(), "product created");
        Ok(stored)
    }

    /// Replaces an existing product. The id in the path wins over any id in
    /// the payload; the name-uniqueness check skips the product itself.
    pub async fn update(
        &self,
        id: ProductId,
        new: NewProduct,
        category_id: CategoryId,
    ) -> Result<Product, CatalogError> {
        let existing = self.get(id).await?;
        let category = self.resolve_category(category_id).await?;
        let renamed =
            new.name.as_str().to_lowercase() != existing.name.as_str().to_lowercase();
        if renamed && self.products.exists_by_name(new.name.as_str()).await? {
            return Err(CatalogError::conflict(
                "a product with this name already exists",
            ));
        }
        self.enforce_promotional_cap(&new)?;
        let stored = self
            .products
            .save(
                &NewProduct {
                    id: Some(id),
                    name: new.name,
                    price: new.price,
                },
                &category,
            )
            .await?;
        tracing::info!(product_id = stored.id.value(), "product updated");
        Ok(stored)
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        if !self.products.exists(id).await? {
            return Err(CatalogError::not_found("product", id.value()));
        }
        self.products.delete(id).await?;
        tracing::info!(product_id = id.value(), "product deleted");
        Ok(())
    }

    /// Simulates a percentage discount on a stored product. Nothing is
    /// persisted; the final price is rounded to cents.
    pub async fn apply_discount(
        &self,
        id: ProductId,
        percentage: f64,
    ) -> Result<Discount, CatalogError> {
        let product = self.get(id).await?;
        if !(0.0..=MAX_DISCOUNT_PERCENTAGE).contains(&percentage) {
            return Err(CatalogError::business_rule(
                "discount percentage must be between 0% and 50%",
            ));
        }
        let original = product.price.amount();
        let final_price = round_to_cents(original * (1.0 - percentage / 100.0));
        Ok(Discount {
            name: product.name.as_str().to_owned(),
            original_price: original,
            discount_label: format!("{percentage:.1}%"),
            final_price,
        })
    }

    async fn resolve_category(&self, id: CategoryId) -> Result<Category, CatalogError> {
        self.categories
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::business_rule("category not found"))
    }

    fn enforce_promotional_cap(&self, new: &NewProduct) -> Result<(), CatalogError> {
        if new.name.is_promotional() && !new.price.within_promotional_cap() {
            return Err(CatalogError::business_rule(
                "promotional products must be priced below 500.00",
            ));
        }
        Ok(())
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
