//! Category entity - a named grouping that products belong to.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;
use crate::value_objects::CategoryName;

/// A stored category.
///
/// Category names are unique under case-insensitive comparison; the
/// services enforce that against the store at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}

impl Category {
    pub fn new(id: CategoryId, name: CategoryName) -> Self {
        Self { id, name }
    }
}

/// A category record to persist.
///
/// `id` is optional: a client may supply one (rejected if taken), otherwise
/// the store assigns the next sequential id on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub id: Option<CategoryId>,
    pub name: CategoryName,
}
