//! Category and price filters over a [`crate::types::Catalog`].

use crate::types::{Catalog, Order, Product};

/// Returns the products of `category` priced strictly above `min_price`,
/// preserving source order.
pub fn products_above_price<'a>(
    catalog: &'a Catalog,
    category: &str,
    min_price: f64,
) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| p.category == category && p.price > min_price)
        .collect()
}

/// Returns the orders containing at least one product of `category`,
/// preserving source order of orders.
pub fn orders_with_category<'a>(catalog: &'a Catalog, category: &str) -> Vec<&'a Order> {
    catalog
        .orders()
        .iter()
        .filter(|order| catalog.order_products(order).any(|p| p.category == category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{orders_with_category, products_above_price};
    use crate::types::{Catalog, Order, Product};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new(1, "Books", 150.0),
                Product::new(2, "Books", 80.0),
                Product::new(3, "Baby", 25.0),
                Product::new(4, "Books", 100.0),
                Product::new(5, "Books", 210.0),
            ],
            vec![
                Order::new(10, date(2023, 1, 1), vec![1, 2]),
                Order::new(11, date(2023, 2, 2), vec![3]),
                Order::new(12, date(2023, 3, 3), vec![2, 3, 5]),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn products_above_price_is_strict_and_ordered() {
        let catalog = sample_catalog();
        let out = products_above_price(&catalog, "Books", 100.0);
        // id 4 is priced exactly at the bound and excluded.
        let ids: Vec<u32> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(out.iter().all(|p| p.category == "Books" && p.price > 100.0));
    }

    #[test]
    fn products_above_price_empty_for_unknown_category() {
        let catalog = sample_catalog();
        assert!(products_above_price(&catalog, "Garden", 0.0).is_empty());
    }

    #[test]
    fn orders_with_category_preserves_order_sequence() {
        let catalog = sample_catalog();
        let ids: Vec<u32> = orders_with_category(&catalog, "Baby")
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn orders_with_category_empty_when_no_order_matches() {
        let catalog = sample_catalog();
        assert!(orders_with_category(&catalog, "Garden").is_empty());
    }

    #[test]
    fn empty_catalog_filters_to_empty() {
        let catalog = Catalog::default();
        assert!(products_above_price(&catalog, "Books", 100.0).is_empty());
        assert!(orders_with_category(&catalog, "Baby").is_empty());
    }
}
