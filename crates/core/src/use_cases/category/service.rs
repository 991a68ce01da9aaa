//! Category reads and writes.

use std::sync::Arc;

use catalogo_domain::{Category, CategoryId, CategoryName, NewCategory, Product};

use crate::infrastructure::ports::{CategoryRepo, ProductRepo};
use crate::use_cases::error::CatalogError;

/// Stateless service over the category store.
///
/// Uniqueness checks are check-then-act against the store: two concurrent
/// creates with the same name can both pass the lookup. The store's own
/// constraints are the last line of defence; the window is accepted here.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepo>,
    products: Arc<dyn ProductRepo>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepo>, products: Arc<dyn ProductRepo>) -> Self {
        Self {
            categories,
            products,
        }
    }

    pub async fn list(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.list().await?)
    }

    pub async fn get(&self, id: CategoryId) -> Result<Category, CatalogError> {
        self.categories
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("category", id.value()))
    }

    /// Case-insensitive substring search. No match is an empty list, not an
    /// error.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.search_by_name(fragment).await?)
    }

    pub async fn create(&self, new: NewCategory) -> Result<Category, CatalogError> {
        if let Some(id) = new.id {
            if self.categories.exists(id).await? {
                return Err(CatalogError::conflict("category id already exists"));
            }
        }
        if self.categories.exists_by_name(new.name.as_str()).await? {
            return Err(CatalogError::conflict(
                "a category with this name already exists",
            ));
        }
        let stored = self.categories.save(&new).await?;
        tracing::info!(category_id = stored.id.value(), "category created");
        Ok(stored)
    }

    /// Overwrites the name of an existing category. The id in the path wins;
    /// no uniqueness check is applied on update.
    pub async fn update(&self, id: CategoryId, name: CategoryName) -> Result<Category, CatalogError> {
        if !self.categories.exists(id).await? {
            return Err(CatalogError::not_found("category", id.value()));
        }
        let stored = self
            .categories
            .save(&NewCategory {
                id: Some(id),
                name,
            })
            .await?;
        tracing::info!(category_id = stored.id.value(), "category updated");
        Ok(stored)
    }

    /// Removes the category. Products keep their embedded snapshot of it;
    /// deletion does not cascade or block on references.
    pub async fn delete(&self, id: CategoryId) -> Result<(), CatalogError> {
        if !self.categories.exists(id).await? {
            return Err(CatalogError::not_found("category", id.value()));
        }
        self.categories.delete(id).await?;
        tracing::info!(category_id = id.value(), "category deleted");
        Ok(())
    }

    /// Lists the products referencing this category.
    pub async fn products(&self, id: CategoryId) -> Result<Vec<Product>, CatalogError> {
        if !self.categories.exists(id).await? {
            return Err(CatalogError::not_found("category", id.value()));
        }
        Ok(self.products.list_by_category(id).await?)
    }
}
