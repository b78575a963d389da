use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ImageUrl, ProductId, ProductName, ProductPrice, ProductStatus, ProductUrl,
};

/// Catalog product record. Products are owned by the catalog and are
/// read-only to this service; `sort_weight` is the catalog's secondary
/// sort key used for the default listing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub status: ProductStatus,
    pub image_url: Option<ImageUrl>,
    pub url: ProductUrl,
    pub sort_weight: i32,
    pub published_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
