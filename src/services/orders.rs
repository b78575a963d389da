use std::collections::HashMap;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::ordering::reconcile;
use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::categories::CategoryDto;
use crate::dto::orders::CategoryOrderDto;
use crate::dto::products::ProductSummaryDto;
use crate::forms::orders::SaveOrderFormPayload;
use crate::repository::{
    CategoryOrderReader, CategoryOrderWriter, CategoryReader, ProductReader,
};

use super::{ServiceError, ServiceResult};

/// Rearrange `membership` (already in catalog default order) into the
/// effective display order given a stored custom order.
pub fn apply_effective_order(membership: Vec<Product>, stored: &[ProductId]) -> Vec<Product> {
    let member_ids: Vec<ProductId> = membership.iter().map(|p| p.id).collect();
    let effective = reconcile(stored, &member_ids);

    let mut by_id: HashMap<ProductId, Product> =
        membership.into_iter().map(|p| (p.id, p)).collect();
    effective
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect()
}

/// Core business logic for the admin order-load endpoint.
///
/// Merges the stored custom order with the live category membership so the
/// admin screen always shows every current member exactly once, stale
/// entries silently dropped and new products appended at the end.
pub fn load_category_order<R>(
    category_id: i32,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<CategoryOrderDto>
where
    R: CategoryReader + ProductReader + CategoryOrderReader,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let category_id = CategoryId::new(category_id)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

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
            log::error!("Failed to load stored category order: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let products = apply_effective_order(membership, &stored)
        .into_iter()
        .map(ProductSummaryDto::from)
        .collect();

    Ok(CategoryOrderDto::new(products))
}

/// Core business logic for the admin order-save endpoint.
///
/// The submitted sequence is authoritative for every product it lists and
/// overwrites the stored order wholesale. Returns `Ok(false)` when the
/// store rejects the write, so the route can answer with a storage-fault
/// status while validation problems keep surfacing as errors.
pub fn save_category_order<R>(
    payload: SaveOrderFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryOrderWriter,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.save_category_order(payload.category_id, &payload.product_ids) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to save category order: {e}");
            Ok(false)
        }
    }
}

/// Categories with their published product counts, for the admin UI's
/// category selector.
pub fn list_categories<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

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
