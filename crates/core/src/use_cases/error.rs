//! Shared error taxonomy for the catalog services.

use catalogo_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors raised by [`CategoryService`] and [`ProductService`].
///
/// Every rule violation is a typed, message-bearing value: the boundary
/// layer matches on the kind to pick a transport response and renders the
/// message as-is. All variants are terminal for the request; nothing is
/// retried here.
///
/// [`CategoryService`]: crate::use_cases::CategoryService
/// [`ProductService`]: crate::use_cases::ProductService
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested entity id does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A create would violate an id- or name-uniqueness invariant.
    #[error("{0}")]
    Conflict(String),

    /// A cross-field or cross-entity rule failed: missing category
    /// reference, promotional price cap, discount percentage out of range.
    #[error("{0}")]
    BusinessRule(String),

    /// A field value failed structural validation.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The store itself failed.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CatalogError::not_found("category", 7);
        assert_eq!(err.to_string(), "category not found: 7");
    }

    #[test]
    fn domain_error_converts_to_validation() {
        let err: CatalogError = DomainError::validation("bad value").into();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn repo_error_converts_to_repo() {
        let err: CatalogError = RepoError::database("get", "connection lost").into();
        assert!(matches!(err, CatalogError::Repo(_)));
    }
}
