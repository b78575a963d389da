use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::types::ProductCount;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub product_count: i32,
}

impl CategoryDto {
    pub fn new(category: Category, product_count: Option<ProductCount>) -> Self {
        Self {
            id: category.id.get(),
            name: category.name.into_inner(),
            product_count: product_count.map(ProductCount::get).unwrap_or(0),
        }
    }
}
