use diesel::prelude::*;

use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductStatus};
use crate::models::product::Product as DbProduct;
use crate::repository::{DieselRepository, ProductReader, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_category_products(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        // Membership is direct assignment rows only: a product assigned to
        // a subcategory never surfaces in the parent category's listing.
        let items = products::table
            .inner_join(product_categories::table)
            .filter(product_categories::category_id.eq(category_id.get()))
            .filter(products::status.eq(ProductStatus::Published.as_str()))
            .order((products::sort_weight.asc(), products::name.asc()))
            .select(products::all_columns)
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }
}
