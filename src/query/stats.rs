//! Per-category price summary statistics.

use crate::types::Catalog;

/// Summary statistics over the prices of one category.
///
/// The empty case is `count = 0`, `sum = 0.0`, and `min`/`max`/[`average`]
/// absent, rather than infinities or an error.
///
/// [`average`]: PriceStats::average
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceStats {
    /// Number of products seen.
    pub count: usize,
    /// Sum of prices (0.0 when empty).
    pub sum: f64,
    /// Minimal price, `None` when empty.
    pub min: Option<f64>,
    /// Maximal price, `None` when empty.
    pub max: Option<f64>,
}

impl PriceStats {
    /// Mean price, or `None` when no products were seen.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Computes count, min, max, sum, and average price over the products of
/// `category` in a single pass.
pub fn category_price_stats(catalog: &Catalog, category: &str) -> PriceStats {
    let mut stats = PriceStats::default();
    for product in catalog.products_in_category(category) {
        stats.count += 1;
        stats.sum += product.price;
        stats.min = Some(stats.min.map_or(product.price, |m| m.min(product.price)));
        stats.max = Some(stats.max.map_or(product.price, |m| m.max(product.price)));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::{category_price_stats, PriceStats};
    use crate::types::{Catalog, Product};

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new(1, "Books", 150.0),
                Product::new(2, "Books", 80.0),
                Product::new(3, "Books", 10.0),
                Product::new(4, "Toys", 40.0),
            ],
            vec![],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn stats_aggregate_one_category_only() {
        let catalog = sample_catalog();
        let books = category_price_stats(&catalog, "Books");
        assert_eq!(books.count, 3);
        assert_eq!(books.sum, 240.0);
        assert_eq!(books.min, Some(10.0));
        assert_eq!(books.max, Some(150.0));
        assert_eq!(books.average(), Some(80.0));
    }

    #[test]
    fn single_product_category_has_equal_min_max() {
        let catalog = sample_catalog();
        let toys = category_price_stats(&catalog, "Toys");
        assert_eq!(toys.count, 1);
        assert_eq!(toys.min, Some(40.0));
        assert_eq!(toys.max, Some(40.0));
        assert_eq!(toys.average(), Some(40.0));
    }

    #[test]
    fn empty_category_uses_the_absent_sentinel() {
        let catalog = sample_catalog();
        let none = category_price_stats(&catalog, "Garden");
        assert_eq!(
            none,
            PriceStats {
                count: 0,
                sum: 0.0,
                min: None,
                max: None,
            }
        );
        assert_eq!(none.average(), None);
    }
}
