use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductCount, ProductId, ProductStatus};
use crate::repository::{
    CategoryOrderReader, CategoryOrderWriter, CategoryReader, ProductReader, RepositoryError,
    RepositoryResult,
};

/// Simple in-memory repository used for unit tests.
///
/// Membership vectors are taken as already being in the catalog default
/// order. Order reads/writes can be made to fail to exercise the
/// storage-fault paths.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    products: Vec<Product>,
    memberships: HashMap<CategoryId, Vec<ProductId>>,
    orders: RefCell<HashMap<CategoryId, Vec<ProductId>>>,
    fail_order_reads: bool,
    fail_order_writes: bool,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
            ..Self::default()
        }
    }

    pub fn with_membership(mut self, category_id: CategoryId, product_ids: Vec<ProductId>) -> Self {
        self.memberships.insert(category_id, product_ids);
        self
    }

    pub fn with_order(self, category_id: CategoryId, product_ids: Vec<ProductId>) -> Self {
        self.orders.borrow_mut().insert(category_id, product_ids);
        self
    }

    pub fn failing_order_reads(mut self) -> Self {
        self.fail_order_reads = true;
        self
    }

    pub fn failing_order_writes(mut self) -> Self {
        self.fail_order_writes = true;
        self
    }

    /// The order currently persisted for a category, if any.
    pub fn saved_order(&self, category_id: CategoryId) -> Option<Vec<ProductId>> {
        self.orders.borrow().get(&category_id).cloned()
    }

    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    fn count_category_products(&self) -> RepositoryResult<HashMap<CategoryId, ProductCount>> {
        let mut counts = HashMap::new();
        for (category_id, product_ids) in &self.memberships {
            let published = product_ids
                .iter()
                .filter_map(|id| self.find_product(*id))
                .filter(|p| p.status == ProductStatus::Published)
                .count();
            if published > 0 {
                counts.insert(*category_id, ProductCount::new(published as i32)?);
            }
        }
        Ok(counts)
    }
}

impl ProductReader for TestRepository {
    fn list_category_products(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>> {
        let members = self
            .memberships
            .get(&category_id)
            .cloned()
            .unwrap_or_default();
        Ok(members
            .into_iter()
            .filter_map(|id| self.find_product(id))
            .filter(|p| p.status == ProductStatus::Published)
            .collect())
    }
}

impl CategoryOrderReader for TestRepository {
    fn load_category_order(&self, category_id: CategoryId) -> RepositoryResult<Vec<ProductId>> {
        if self.fail_order_reads {
            return Err(RepositoryError::Validation(
                "simulated order read failure".to_string(),
            ));
        }
        Ok(self
            .orders
            .borrow()
            .get(&category_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl CategoryOrderWriter for TestRepository {
    fn save_category_order(
        &self,
        category_id: CategoryId,
        order: &[ProductId],
    ) -> RepositoryResult<usize> {
        if self.fail_order_writes {
            return Err(RepositoryError::Validation(
                "simulated order write failure".to_string(),
            ));
        }
        self.orders
            .borrow_mut()
            .insert(category_id, order.to_vec());
        Ok(1)
    }
}
