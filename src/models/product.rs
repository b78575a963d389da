use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;
use crate::domain::types::{
    ImageUrl, ProductId, ProductName, ProductPrice, ProductStatus, ProductUrl, TypeConstraintError,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub status: String,
    pub image_url: Option<String>,
    pub url: String,
    pub sort_weight: i32,
    pub published_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            status: ProductStatus::try_from(product.status)?,
            image_url: product.image_url.map(ImageUrl::new).transpose()?,
            url: ProductUrl::new(product.url)?,
            sort_weight: product.sort_weight,
            published_at: product.published_at,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}
