//! In-memory category store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use catalogo_domain::{Category, CategoryId, NewCategory};

use crate::infrastructure::ports::{CategoryRepo, RepoError};

/// Category store backed by a concurrent map.
///
/// Ids are assigned from an atomic sequence; saving with an explicit id
/// advances the sequence past it so later assignments never collide.
pub struct MemoryCategoryRepo {
    rows: DashMap<i64, Category>,
    sequence: AtomicI64,
}

impl MemoryCategoryRepo {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }

    fn allocate(&self, requested: Option<CategoryId>) -> i64 {
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

impl Default for MemoryCategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepo for MemoryCategoryRepo {
    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError> {
        Ok(self.rows.contains_key(&id.value()))
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, RepoError> {
        Ok(self.rows.get(&id.value()).map(|row| row.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let mut rows: Vec<Category> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by_key(|category| category.id);
        Ok(rows)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Category>, RepoError> {
        let needle = fragment.to_lowercase();
        let mut rows: Vec<Category> = self
            .rows
            .iter()
            .filter(|row| row.name.as_str().to_lowercase().contains(&needle))
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(|category| category.id);
        Ok(rows)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError> {
        let needle = name.to_lowercase();
        Ok(self
            .rows
            .iter()
            .any(|row| row.name.as_str().to_lowercase() == needle))
    }

    async fn save(&self, category: &NewCategory) -> Result<Category, RepoError> {
        let id = self.allocate(category.id);
        let stored = Category::new(CategoryId::new(id), category.name.clone());
        self.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CategoryId) -> Result<(), RepoError> {
        self.rows.remove(&id.value());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogo_domain::CategoryName;

    fn new_category(id: Option<i64>, name: &str) -> NewCategory {
        NewCategory {
            id: id.map(CategoryId::new),
            name: CategoryName::new(name).unwrap(),
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_when_none_supplied() {
        let repo = MemoryCategoryRepo::new();
        let first = repo.save(&new_category(None, "Informática")).await.unwrap();
        let second = repo.save(&new_category(None, "Livros")).await.unwrap();
        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
    }

    #[tokio::test]
    async fn explicit_id_advances_the_sequence() {
        let repo = MemoryCategoryRepo::new();
        repo.save(&new_category(Some(10), "Informática")).await.unwrap();
        let next = repo.save(&new_category(None, "Livros")).await.unwrap();
        assert_eq!(next.id.value(), 11);
    }

    #[tokio::test]
    async fn save_with_existing_id_replaces() {
        let repo = MemoryCategoryRepo::new();
        repo.save(&new_category(Some(1), "Informática")).await.unwrap();
        repo.save(&new_category(Some(1), "Periféricos")).await.unwrap();
        let stored = repo.get(CategoryId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.name.as_str(), "Periféricos");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let repo = MemoryCategoryRepo::new();
        repo.save(&new_category(None, "Informática")).await.unwrap();
        repo.save(&new_category(None, "Livros")).await.unwrap();
        let hits = repo.search_by_name("FORMÁT").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_str(), "Informática");
    }

    #[tokio::test]
    async fn exists_by_name_ignores_case() {
        let repo = MemoryCategoryRepo::new();
        repo.save(&new_category(None, "Informática")).await.unwrap();
        assert!(repo.exists_by_name("INFORMÁTICA").await.unwrap());
        assert!(!repo.exists_by_name("Inform").await.unwrap());
    }
}
