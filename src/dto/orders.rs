use serde::Serialize;

use crate::dto::products::ProductSummaryDto;

/// Response body of the admin order-load endpoint: the reconciled product
/// sequence for a category plus its size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOrderDto {
    pub products: Vec<ProductSummaryDto>,
    pub count: usize,
}

impl CategoryOrderDto {
    pub fn new(products: Vec<ProductSummaryDto>) -> Self {
        let count = products.len();
        Self { products, count }
    }
}
