use crate::domain::types::{CategoryId, ProductCount};
use crate::dto::categories::CategoryDto;
use crate::dto::products::ProductSummaryDto;
use crate::repository::{CategoryOrderReader, CategoryReader, ProductReader};
use crate::services::orders::apply_effective_order;

use super::{ServiceError, ServiceResult};

/// Categories with their published product counts for the storefront index.
pub fn show_index<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let counts = match repo.count_category_products() {
        Ok(counts) => counts,
        Err(e) => {
            log::error!("Failed to count category products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(categories
        .into_iter()
        .map(|category| {
            let count = counts.get(&category.id).copied();
            CategoryDto::new(category, count)
        })
        .collect())
}

/// Core business logic for a single-category archive page.
///
/// Products come out in the effective order: stored custom order first,
/// reconciled against the live membership. A failing order-store read only
/// costs the custom ordering, never the page: the listing falls back to
/// the catalog default order. This is the only read path that consults the
/// order store; search and any multi-category views keep the catalog's own
/// ordering.
pub fn show_category<R>(
    category_id: i32,
    repo: &R,
) -> ServiceResult<(CategoryDto, Vec<ProductSummaryDto>)>
where
    R: CategoryReader + ProductReader + CategoryOrderReader,
{
    let category_id = match CategoryId::new(category_id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let membership = match repo.list_category_products(category_id) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list category products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let stored = match repo.load_category_order(category_id) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Falling back to default order for category {category_id}: {e}");
            Vec::new()
        }
    };

    let count = ProductCount::new(membership.len() as i32).ok();
    let products: Vec<ProductSummaryDto> = apply_effective_order(membership, &stored)
        .into_iter()
        .map(ProductSummaryDto::from)
        .collect();

    Ok((CategoryDto::new(category, count), products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::product::Product;
    use crate::domain::types::{
        CategoryName, ProductId, ProductName, ProductPrice, ProductStatus, ProductUrl,
    };
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, name: &str) -> Category {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            parent_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_product(id: i32, name: &str) -> Product {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            price: ProductPrice::new(4.0).unwrap(),
            status: ProductStatus::Published,
            image_url: None,
            url: ProductUrl::new(format!("https://example.com/p/{id}")).unwrap(),
            sort_weight: 0,
            published_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    fn ids(raw: &[i32]) -> Vec<ProductId> {
        raw.iter().map(|id| ProductId::new(*id).unwrap()).collect()
    }

    fn coffee_repo() -> TestRepository {
        TestRepository::new(
            vec![sample_category(1, "Coffee")],
            vec![
                sample_product(1, "Arabica"),
                sample_product(2, "Liberica"),
                sample_product(3, "Robusta"),
            ],
        )
        .with_membership(CategoryId::new(1).unwrap(), ids(&[1, 2, 3]))
    }

    #[test]
    fn applies_the_stored_custom_order() {
        let repo = coffee_repo().with_order(CategoryId::new(1).unwrap(), ids(&[3, 1]));

        let (category, products) = show_category(1, &repo).unwrap();

        assert_eq!(category.product_count, 3);
        let order: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn falls_back_to_default_order_when_the_order_store_fails() {
        let repo = coffee_repo()
            .with_order(CategoryId::new(1).unwrap(), ids(&[3, 1]))
            .failing_order_reads();

        let (_, products) = show_category(1, &repo).unwrap();

        let order: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn unknown_category_is_not_found() {
        let repo = coffee_repo();
        assert!(matches!(
            show_category(9, &repo).unwrap_err(),
            ServiceError::NotFound
        ));
        assert!(matches!(
            show_category(-1, &repo).unwrap_err(),
            ServiceError::NotFound
        ));
    }

    #[test]
    fn index_lists_categories_with_counts() {
        let repo = coffee_repo();

        let categories = show_index(&repo).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Coffee");
        assert_eq!(categories[0].product_count, 3);
    }
}
