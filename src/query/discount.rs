//! In-place price discounting, the query layer's only mutation.

use crate::types::{Catalog, Product};

/// Multiplies the price of every product of `category` by `factor`, in place,
/// and returns those products with their updated prices in source order.
///
/// This mutates the shared product records: the new prices are observable by
/// every query run afterward. The operation is not idempotent; applying a 0.5
/// factor twice quarters the price. Requiring `&mut Catalog` makes the access
/// exclusive for the duration of the mutation.
pub fn apply_discount<'a>(
    catalog: &'a mut Catalog,
    category: &str,
    factor: f64,
) -> Vec<&'a Product> {
    for product in catalog.products_mut() {
        if product.category == category {
            product.price *= factor;
        }
    }
    catalog
        .products()
        .iter()
        .filter(|p| p.category == category)
        .collect()
}
