//! Order reconciliation for category product listings.
//!
//! A stored custom order goes stale as soon as products are added to or
//! removed from the category. [`reconcile`] merges the stored sequence with
//! the live membership into the effective display order; it is pure and
//! performs no catalog or storage lookups, so both the admin screen and the
//! storefront listing share exactly the same merge.

use std::collections::HashSet;

use crate::domain::types::ProductId;

/// Merge a stored custom order with the live category membership.
///
/// Entries of `custom_order` that are still members keep their relative
/// order and come first; members missing from `custom_order` (products
/// added since the order was last saved) follow in `membership`'s own
/// order. Stale entries (no longer members) are dropped. The result is
/// always a permutation of `membership`, and reconciling an output against
/// the same membership again returns it unchanged.
///
/// `membership` is expected to be deduplicated; a stored order containing
/// duplicates (legacy data) contributes only the first occurrence.
pub fn reconcile(custom_order: &[ProductId], membership: &[ProductId]) -> Vec<ProductId> {
    if custom_order.is_empty() {
        return membership.to_vec();
    }

    let members: HashSet<ProductId> = membership.iter().copied().collect();

    let mut seen: HashSet<ProductId> = HashSet::with_capacity(custom_order.len());
    let mut ordered: Vec<ProductId> = custom_order
        .iter()
        .copied()
        .filter(|id| members.contains(id) && seen.insert(*id))
        .collect();

    ordered.extend(membership.iter().copied().filter(|id| !seen.contains(id)));

    ordered
}

/// Sanitize a product ID sequence submitted by the reordering UI.
///
/// Each element is trimmed and parsed as a whole integer (no numeric-prefix
/// coercion: `"7abc"` is dropped, not read as 7). Non-positive results are
/// dropped and duplicates keep their first occurrence, so the returned
/// sequence satisfies the stored-order invariants.
pub fn sanitize_order<I, S>(values: I) -> Vec<ProductId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<ProductId> = HashSet::new();
    values
        .into_iter()
        .filter_map(|value| {
            let id = value.as_ref().trim().parse::<i32>().ok()?;
            ProductId::new(id).ok()
        })
        .filter(|id| seen.insert(*id))
        .collect()
}
