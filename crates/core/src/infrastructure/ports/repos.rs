//! Store port traits for catalog persistence.

use async_trait::async_trait;

use catalogo_domain::{Category, CategoryId, NewCategory, NewProduct, Product, ProductId};

use super::error::RepoError;

/// Durable keyed storage for categories.
///
/// `save` is insert-or-replace: a record with `id: Some(..)` is upserted at
/// that id, one with `id: None` gets the next store-assigned id. Name search
/// and uniqueness are case-insensitive; the normalized comparison lives here,
/// behind the port, so the services never duplicate the scan.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError>;
    async fn get(&self, id: CategoryId) -> Result<Option<Category>, RepoError>;
    async fn list(&self) -> Result<Vec<Category>, RepoError>;

    /// Case-insensitive substring match on the name.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Category>, RepoError>;

    /// Case-insensitive whole-name equality.
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError>;

    async fn save(&self, category: &NewCategory) -> Result<Category, RepoError>;
    async fn delete(&self, id: CategoryId) -> Result<(), RepoError>;
}

/// Durable keyed storage for products.
///
/// Same contract as [`CategoryRepo`]; `save` additionally takes the resolved
/// category to embed in the stored record, and `list_by_category` returns
/// every product whose category id matches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepo: Send + Sync {
    async fn exists(&self, id: ProductId) -> Result<bool, RepoError>;
    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepoError>;
    async fn list(&self) -> Result<Vec<Product>, RepoError>;

    /// Case-insensitive substring match on the name.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>, RepoError>;

    /// Case-insensitive whole-name equality.
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError>;

    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, RepoError>;

    async fn save(&self, product: &NewProduct, category: &Category) -> Result<Product, RepoError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepoError>;
}
