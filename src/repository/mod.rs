use std::collections::HashMap;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductCount, ProductId};

pub mod category;
pub mod errors;
pub mod order;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories in name order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Count published products directly assigned to each category.
    /// Categories with no published products are absent from the map.
    fn count_category_products(&self) -> RepositoryResult<HashMap<CategoryId, ProductCount>>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// The live membership of a category: published products with a direct
    /// assignment to exactly this category (subcategory assignments are
    /// never inherited), in the catalog default order (`sort_weight`
    /// ascending, then name ascending).
    fn list_category_products(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>>;
}

/// Read access to the persisted per-category custom order.
pub trait CategoryOrderReader {
    /// Load the stored custom order for a category.
    ///
    /// Returns an empty sequence when no order was ever saved or when the
    /// stored value is not a valid sequence of positive integers; an `Err`
    /// means a genuine storage fault, never bad stored data.
    fn load_category_order(&self, category_id: CategoryId) -> RepositoryResult<Vec<ProductId>>;
}

/// Write access to the persisted per-category custom order.
pub trait CategoryOrderWriter {
    /// Overwrite the stored order for a category wholesale.
    ///
    /// Writing a value identical to the stored one is a success. Concurrent
    /// saves for the same category resolve as last-write-wins; there is no
    /// optimistic locking.
    fn save_category_order(
        &self,
        category_id: CategoryId,
        order: &[ProductId],
    ) -> RepositoryResult<usize>;
}
