//! Read (and one write) queries over a [`crate::types::Catalog`].
//!
//! Every operation is a single- or two-pass transformation over the held
//! collections, executed synchronously. All results are deterministic for a
//! fixed dataset: source order is the encounter order, and every stable
//! operation breaks ties by it.
//!
//! Currently implemented:
//!
//! - [`filter`]: category/price product filters and orders-containing-category
//! - [`discount`]: in-place price discounting for a category (the sole mutation)
//! - [`rank`]: cheapest product in a category, most recent orders
//! - [`stats`]: per-category price summary statistics
//! - [`group`]: insertion-ordered grouping maps
//!
//! ## Example: filter → discount → stats
//!
//! ```rust
//! use store_query::query::{discount, filter, stats};
//! use store_query::types::{Catalog, Product};
//!
//! let mut catalog = Catalog::new(
//!     vec![
//!         Product::new(1, "Books", 150.0),
//!         Product::new(2, "Toys", 40.0),
//!         Product::new(3, "Toys", 60.0),
//!     ],
//!     vec![],
//!     vec![],
//! )
//! .unwrap();
//!
//! assert_eq!(filter::products_above_price(&catalog, "Books", 100.0).len(), 1);
//!
//! // Halve every Toys price, in place.
//! let discounted = discount::apply_discount(&mut catalog, "Toys", 0.5);
//! assert_eq!(discounted.iter().map(|p| p.price).collect::<Vec<_>>(), vec![20.0, 30.0]);
//!
//! // The mutation is visible to every later query.
//! let toys = stats::category_price_stats(&catalog, "Toys");
//! assert_eq!(toys.sum, 50.0);
//! ```

pub mod discount;
pub mod filter;
pub mod group;
pub mod rank;
pub mod stats;

pub use discount::apply_discount;
pub use filter::{orders_with_category, products_above_price};
pub use group::{order_product_counts, product_ids_by_category};
pub use rank::{cheapest_in_category, most_recent_orders};
pub use stats::{category_price_stats, PriceStats};
