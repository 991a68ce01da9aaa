//! In-memory product store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use catalogo_domain::{Category, CategoryId, NewProduct, Product, ProductId};

use crate::infrastructure::ports::{ProductRepo, RepoError};

/// Product store backed by a concurrent map.
///
/// Same id-assignment policy as [`MemoryCategoryRepo`]; the stored record
/// embeds the category snapshot passed to `save`.
///
/// [`MemoryCategoryRepo`]: crate::infrastructure::memory::MemoryCategoryRepo
pub struct MemoryProductRepo {
    rows: DashMap<i64, Product>,
    sequence: AtomicI64,
}

impl MemoryProductRepo {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }

    fn allocate(&self, requested: Option<ProductId>) -> i64 {
        match requested {
            Some(id) => {
                let id = id.value();
                self.sequence.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.sequence.fetch_add(1, Ordering::SeqCst),
        }
    }
}

impl Default for MemoryProductRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepo for MemoryProductRepo {
    async fn exists(&self, id: ProductId) -> Result<bool, RepoError> {
        Ok(self.rows.contains_key(&id.value()))
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        Ok(self.rows.get(&id.value()).map(|row| row.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Product>, RepoError> {
        let mut rows: Vec<Product> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by_key(|product| product.id);
        Ok(rows)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>, RepoError> {
        let needle = fragment.to_lowercase();
        let mut rows: Vec<Product> = self
            .rows
            .iter()
            .filter(|row| row.name.as_str().to_lowercase().contains(&needle))
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(|product| product.id);
        Ok(rows)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError> {
        let needle = name.to_lowercase();
        Ok(self
            .rows
            .iter()
            .any(|row| row.name.as_str().to_lowercase() == needle))
    }

    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, RepoError> {
        let mut rows: Vec<Product> = self
            .rows
            .iter()
            .filter(|row| row.category.id == category_id)
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(|product| product.id);
        Ok(rows)
    }

    async fn save(&self, product: &NewProduct, category: &Category) -> Result<Product, RepoError> {
        let id = self.allocate(product.id);
        let stored = Product::new(
            ProductId::new(id),
            product.name.clone(),
            product.price,
            category.clone(),
        );
        self.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepoError> {
        self.rows.remove(&id.value());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogo_domain::{CategoryName, Price, ProductName};

    fn category(id: i64, name: &str) -> Category {
        Category::new(CategoryId::new(id), CategoryName::new(name).unwrap())
    }

    fn new_product(id: Option<i64>, name: &str, price: f64) -> NewProduct {
        NewProduct {
            id: id.map(ProductId::new),
            name: ProductName::new(name).unwrap(),
            price: Price::new(price).unwrap(),
        }
    }

    #[tokio::test]
    async fn save_embeds_the_category_snapshot() {
        let repo = MemoryProductRepo::new();
        let stored = repo
            .save(&new_product(None, "Notebook", 3500.0), &category(1, "Informática"))
            .await
            .unwrap();
        assert_eq!(stored.category.name.as_str(), "Informática");
    }

    #[tokio::test]
    async fn list_by_category_filters_on_category_id() {
        let repo = MemoryProductRepo::new();
        let informatica = category(1, "Informática");
        let livros = category(2, "Livros");
        repo.save(&new_product(None, "Notebook", 3500.0), &informatica)
            .await
            .unwrap();
        repo.save(&new_product(None, "Mouse", 80.0), &informatica)
            .await
            .unwrap();
        repo.save(&new_product(None, "Dom Casmurro", 40.0), &livros)
            .await
            .unwrap();

        let hits = repo.list_by_category(CategoryId::new(1)).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.category.id == CategoryId::new(1)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = MemoryProductRepo::new();
        let stored = repo
            .save(&new_product(None, "Notebook", 3500.0), &category(1, "Informática"))
            .await
            .unwrap();
        repo.delete(stored.id).await.unwrap();
        assert!(!repo.exists(stored.id).await.unwrap());
    }
}
