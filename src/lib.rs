//! `store-query` is a small library for querying a fixed in-memory store
//! dataset of products, orders, and customers.
//!
//! The dataset is a [`types::Catalog`]: three collections constructed once by a
//! data provider before any query runs. Queries live in [`query`] and are
//! fixed derived views: category/price filters, a cheapest-item lookup,
//! recency-ranked orders, insertion-ordered grouping maps, and summary
//! statistics. Everything is synchronous and single-pass (or two-pass); the
//! one write operation, [`query::discount::apply_discount`], mutates product
//! prices in place through `&mut Catalog`.
//!
//! ## Building a catalog and querying it
//!
//! ```rust
//! use chrono::NaiveDate;
//! use store_query::query::{filter, group, rank, stats};
//! use store_query::types::{Catalog, Order, Product};
//!
//! let catalog = Catalog::new(
//!     vec![
//!         Product::new(1, "Books", 150.0),
//!         Product::new(2, "Books", 80.0),
//!         Product::new(3, "Toys", 40.0),
//!     ],
//!     vec![Order::new(
//!         10,
//!         NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
//!         vec![1, 3],
//!     )],
//!     vec![],
//! )
//! .unwrap();
//!
//! let pricey = filter::products_above_price(&catalog, "Books", 100.0);
//! assert_eq!(pricey.len(), 1);
//! assert_eq!(pricey[0].id, 1);
//!
//! assert_eq!(rank::cheapest_in_category(&catalog, "Books").unwrap().id, 2);
//!
//! let books = stats::category_price_stats(&catalog, "Books");
//! assert_eq!(books.count, 2);
//! assert_eq!(books.average(), Some(115.0));
//!
//! let by_category = group::product_ids_by_category(&catalog);
//! assert_eq!(by_category["Books"], vec![1, 2]);
//! ```
//!
//! ## Loading from JSON
//!
//! Collections can also come from a JSON store document via the [`provider`]
//! module, optionally reporting outcomes to a [`provider::LoadObserver`]:
//!
//! ```rust
//! use store_query::provider::{load_catalog, LoadOptions};
//!
//! let catalog = load_catalog(
//!     "inline",
//!     r#"{"products": [{"id": 1, "category": "Books", "price": 150.0}]}"#,
//!     &LoadOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(catalog.products().len(), 1);
//! ```
//!
//! ## Absent collections
//!
//! There is no null: `Catalog::default()` is the explicit empty dataset, JSON
//! documents may omit any of the three arrays, and every query over an empty
//! catalog returns an empty or absent result rather than an error.
//!
//! ## Modules
//!
//! - [`types`]: product/order/customer records and the owning catalog
//! - [`query`]: the fixed query operations
//! - [`transform`]: standalone list-transform utilities
//! - [`provider`]: catalog loading and load observability
//! - [`error`]: error types for catalog construction and loading

pub mod error;
pub mod provider;
pub mod query;
pub mod transform;
pub mod types;

pub use error::{CatalogError, CatalogResult};
