//! JSON loading for [`crate::types::Catalog`].
//!
//! The expected document shape is a single object with up to three arrays:
//!
//! ```json
//! {
//!   "products": [{"id": 1, "category": "Books", "price": 150.0}],
//!   "orders": [{"id": 10, "order_date": "2023-05-05", "product_ids": [1]}],
//!   "customers": [{"id": 100, "name": "Ada"}]
//! }
//! ```
//!
//! Any of the arrays may be omitted and defaults to empty; dates are ISO
//! `YYYY-MM-DD`. The parsed records go through [`Catalog::new`], so its
//! integrity checks apply.

use serde::Deserialize;

use crate::error::CatalogResult;
use crate::types::{Catalog, Customer, Order, Product};

#[derive(Debug, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    orders: Vec<Order>,
    #[serde(default)]
    customers: Vec<Customer>,
}

/// Deserialize a JSON store document into a validated [`Catalog`].
pub fn catalog_from_json(input: &str) -> CatalogResult<Catalog> {
    let doc: StoreDocument = serde_json::from_str(input)?;
    Catalog::new(doc.products, doc.orders, doc.customers)
}
