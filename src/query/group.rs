//! Insertion-ordered grouping maps.
//!
//! Both operations return [`IndexMap`]s so iteration order matches the source
//! collections (keys in first-encounter order), instead of a hash map's
//! arbitrary order.

use indexmap::IndexMap;

use crate::types::Catalog;

/// Maps each order id to the number of products in that order, in source order
/// of orders.
///
/// Order ids are unique within a catalog, so no key collides.
pub fn order_product_counts(catalog: &Catalog) -> IndexMap<u32, usize> {
    catalog
        .orders()
        .iter()
        .map(|o| (o.id, o.product_ids.len()))
        .collect()
}

/// Groups product ids by category: keys in first-encounter category order,
/// each value in source product order.
pub fn product_ids_by_category(catalog: &Catalog) -> IndexMap<String, Vec<u32>> {
    let mut groups: IndexMap<String, Vec<u32>> = IndexMap::new();
    for product in catalog.products() {
        groups
            .entry(product.category.clone())
            .or_default()
            .push(product.id);
    }
    groups
}
