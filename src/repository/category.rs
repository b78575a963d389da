use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, ProductCount, ProductStatus};
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn count_category_products(&self) -> RepositoryResult<HashMap<CategoryId, ProductCount>> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        let assignments: Vec<i32> = product_categories::table
            .inner_join(products::table)
            .filter(products::status.eq(ProductStatus::Published.as_str()))
            .select(product_categories::category_id)
            .load(&mut conn)?;

        let mut raw: HashMap<CategoryId, i32> = HashMap::new();
        for category_id in assignments {
            *raw.entry(CategoryId::new(category_id)?).or_insert(0) += 1;
        }

        let counts = raw
            .into_iter()
            .map(|(id, count)| Ok((id, ProductCount::new(count)?)))
            .collect::<Result<HashMap<_, _>, crate::domain::types::TypeConstraintError>>()?;

        Ok(counts)
    }
}
