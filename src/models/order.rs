use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Diesel model representing the `category_orders` table.
///
/// `product_ids` holds the stored custom order as a JSON array of positive
/// integer product IDs. Decoding is defensive and lives in the repository:
/// malformed stored values degrade to an empty order instead of erroring.
#[derive(Debug, Clone, Queryable)]
pub struct CategoryOrder {
    pub category_id: i32,
    pub product_ids: String,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`CategoryOrder`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::category_orders)]
pub struct NewCategoryOrder {
    pub category_id: i32,
    pub product_ids: String,
    pub updated_at: NaiveDateTime,
}
