use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::ImageUrl;

/// Product summary rendered by the admin reordering UI and the storefront
/// listing. `edit_url` points at the catalog admin screen for the product;
/// `view_url` is the public product page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummaryDto {
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
    pub price: String,
    pub status: String,
    pub published: String,
    pub view_url: String,
    pub edit_url: String,
}

impl From<Product> for ProductSummaryDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            title: product.name.into_inner(),
            image: product.image_url.map(ImageUrl::into_inner),
            price: format!("{:.2}", product.price.get()),
            status: product.status.to_string(),
            published: product.published_at.format("%d/%m/%Y").to_string(),
            view_url: product.url.into_inner(),
            edit_url: format!("/admin/products/{}", product.id.get()),
        }
    }
}
