use chrono::Utc;
use diesel::prelude::*;

use crate::domain::types::{CategoryId, ProductId};
use crate::models::order::{CategoryOrder, NewCategoryOrder};
use crate::repository::{
    CategoryOrderReader, CategoryOrderWriter, DieselRepository, RepositoryResult,
};

/// Decode a stored order payload.
///
/// Anything that is not a JSON array of integers degrades to an empty
/// order, and non-positive entries are dropped. Bad stored data is
/// equivalent to "no custom order", never a read error.
fn decode_stored_order(raw: &str) -> Vec<ProductId> {
    let Ok(values) = serde_json::from_str::<Vec<i64>>(raw) else {
        return Vec::new();
    };

    values
        .into_iter()
        .filter_map(|value| i32::try_from(value).ok())
        .filter_map(|value| ProductId::new(value).ok())
        .collect()
}

fn encode_order(order: &[ProductId]) -> String {
    serde_json::to_string(&order.iter().map(|id| id.get()).collect::<Vec<i32>>())
        .unwrap_or_else(|_| "[]".to_string())
}

impl CategoryOrderReader for DieselRepository {
    fn load_category_order(&self, category_id: CategoryId) -> RepositoryResult<Vec<ProductId>> {
        use crate::schema::category_orders;

        let mut conn = self.conn()?;

        let stored = category_orders::table
            .filter(category_orders::category_id.eq(category_id.get()))
            .first::<CategoryOrder>(&mut conn)
            .optional()?;

        Ok(stored
            .map(|row| decode_stored_order(&row.product_ids))
            .unwrap_or_default())
    }
}

impl CategoryOrderWriter for DieselRepository {
    fn save_category_order(
        &self,
        category_id: CategoryId,
        order: &[ProductId],
    ) -> RepositoryResult<usize> {
        use crate::schema::category_orders;

        let mut conn = self.conn()?;

        let row = NewCategoryOrder {
            category_id: category_id.get(),
            product_ids: encode_order(order),
            updated_at: Utc::now().naive_utc(),
        };

        let affected = diesel::insert_into(category_orders::table)
            .values(&row)
            .on_conflict(category_orders::category_id)
            .do_update()
            .set(&row)
            .execute(&mut conn)?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i32]) -> Vec<ProductId> {
        raw.iter().map(|id| ProductId::new(*id).unwrap()).collect()
    }

    #[test]
    fn decodes_valid_arrays() {
        assert_eq!(decode_stored_order("[3, 1, 2]"), ids(&[3, 1, 2]));
    }

    #[test]
    fn drops_non_positive_entries() {
        assert_eq!(decode_stored_order("[1, -2, 0, 3]"), ids(&[1, 3]));
    }

    #[test]
    fn malformed_payloads_degrade_to_empty() {
        assert!(decode_stored_order("not json").is_empty());
        assert!(decode_stored_order("{\"a\": 1}").is_empty());
        assert!(decode_stored_order("[1, \"two\"]").is_empty());
        assert!(decode_stored_order("").is_empty());
    }

    #[test]
    fn encode_decode_round_trip() {
        let order = ids(&[5, 3, 8]);
        assert_eq!(decode_stored_order(&encode_order(&order)), order);
    }
}
