//! Min-scan and recency ranking over a [`crate::types::Catalog`].

use crate::types::{Catalog, Order, Product};

/// Returns the cheapest product of `category`, or `None` if the category has
/// no products.
///
/// The scan is stable: on a price tie the first-encountered product wins.
/// (`Iterator::min_by` returns the last minimum on ties, which would break
/// that contract.)
pub fn cheapest_in_category<'a>(catalog: &'a Catalog, category: &str) -> Option<&'a Product> {
    let mut cheapest: Option<&Product> = None;
    for product in catalog.products_in_category(category) {
        match cheapest {
            Some(best) if product.price < best.price => cheapest = Some(product),
            None => cheapest = Some(product),
            _ => {}
        }
    }
    cheapest
}

/// Returns the `n` orders with the latest order date, most recent first.
///
/// The sort is stable and descending by date, so orders sharing a date keep
/// their source relative order. If fewer than `n` orders exist, all are
/// returned.
pub fn most_recent_orders(catalog: &Catalog, n: usize) -> Vec<&Order> {
    let mut recent: Vec<&Order> = catalog.orders().iter().collect();
    recent.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    recent.truncate(n);
    recent
}

#[cfg(test)]
mod tests {
    use super::{cheapest_in_category, most_recent_orders};
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
                Product::new(3, "Books", 80.0),
                Product::new(4, "Toys", 40.0),
            ],
            vec![
                Order::new(1, date(2020, 1, 1), vec![1]),
                Order::new(2, date(2023, 5, 5), vec![2]),
                Order::new(3, date(2021, 2, 2), vec![3]),
                Order::new(4, date(2023, 5, 5), vec![4]),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn cheapest_prefers_first_encountered_on_tie() {
        let catalog = sample_catalog();
        // ids 2 and 3 share the minimal price; 2 comes first.
        assert_eq!(cheapest_in_category(&catalog, "Books").unwrap().id, 2);
    }

    #[test]
    fn cheapest_is_none_for_empty_category() {
        let catalog = sample_catalog();
        assert!(cheapest_in_category(&catalog, "Garden").is_none());
    }

    #[test]
    fn cheapest_price_bounds_the_category() {
        let catalog = sample_catalog();
        let best = cheapest_in_category(&catalog, "Books").unwrap();
        assert!(
            catalog
                .products_in_category("Books")
                .all(|p| best.price <= p.price)
        );
    }

    #[test]
    fn recent_orders_sort_descending_with_stable_ties() {
        let catalog = sample_catalog();
        let ids: Vec<u32> = most_recent_orders(&catalog, 3).iter().map(|o| o.id).collect();
        // 2 and 4 share 2023-05-05; 2 precedes 4 in the source.
        assert_eq!(ids, vec![2, 4, 3]);
    }

    #[test]
    fn recent_orders_returns_all_when_fewer_than_n() {
        let catalog = sample_catalog();
        assert_eq!(most_recent_orders(&catalog, 10).len(), 4);
        assert!(most_recent_orders(&Catalog::default(), 3).is_empty());
    }

    #[test]
    fn recent_orders_zero_is_empty() {
        let catalog = sample_catalog();
        assert!(most_recent_orders(&catalog, 0).is_empty());
    }
}
