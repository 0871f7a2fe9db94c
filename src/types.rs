//! Core data model types for the store dataset.
//!
//! A [`Catalog`] owns three collections (products, orders, customers) supplied
//! once by a data provider before any query runs. The `Vec` order of each
//! collection is the encounter order used for every tie-break and output
//! ordering in [`crate::query`].

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A product in the store.
///
/// `price` is the one mutable field in the model: it is updated in place by
/// [`crate::query::discount::apply_discount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, unique within the catalog.
    pub id: u32,
    /// Category tag, the primary grouping/filter key.
    pub category: String,
    /// Current price.
    pub price: f64,
}

impl Product {
    /// Create a new product.
    pub fn new(id: u32, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            category: category.into(),
            price,
        }
    }
}

/// An order referencing products by id.
///
/// An order does not own the products it lists; `product_ids` are resolved
/// through the owning [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, unique within the catalog.
    pub id: u32,
    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
    /// Products in this order, in order of appearance.
    pub product_ids: Vec<u32>,
}

impl Order {
    /// Create a new order.
    pub fn new(id: u32, order_date: NaiveDate, product_ids: Vec<u32>) -> Self {
        Self {
            id,
            order_date,
            product_ids,
        }
    }
}

/// A customer record.
///
/// The query layer never inspects customers beyond pass-through retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl Customer {
    /// Create a new customer.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The in-memory store dataset: products, orders, and customers.
///
/// Constructed once, then queried. [`Catalog::new`] checks the invariants the
/// query layer depends on (unique product/order ids, resolvable order→product
/// references); queries themselves never validate and never fail.
///
/// `Catalog::default()` is the explicit empty dataset: every query over it
/// returns an empty or absent result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
}

impl Catalog {
    /// Build a catalog from pre-populated collections, preserving their order.
    ///
    /// Returns an error if product or order ids repeat, or if any order lists
    /// a product id that is not in `products`.
    pub fn new(
        products: Vec<Product>,
        orders: Vec<Order>,
        customers: Vec<Customer>,
    ) -> CatalogResult<Self> {
        let mut product_ids = HashSet::with_capacity(products.len());
        for p in &products {
            if !product_ids.insert(p.id) {
                return Err(CatalogError::DuplicateProductId(p.id));
            }
        }

        let mut order_ids = HashSet::with_capacity(orders.len());
        for o in &orders {
            if !order_ids.insert(o.id) {
                return Err(CatalogError::DuplicateOrderId(o.id));
            }
            for pid in &o.product_ids {
                if !product_ids.contains(pid) {
                    return Err(CatalogError::UnknownProduct {
                        order_id: o.id,
                        product_id: *pid,
                    });
                }
            }
        }

        Ok(Self {
            products,
            orders,
            customers,
        })
    }

    /// All products, in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All orders, in source order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All customers, in source order (pass-through retrieval).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a product by id.
    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate the products of a category, in source order.
    pub fn products_in_category<'a, 'c>(
        &'a self,
        category: &'c str,
    ) -> impl Iterator<Item = &'a Product> + use<'a, 'c> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Resolve an order's product references, in the order the order lists them.
    ///
    /// Construction validated every reference, so each id resolves.
    pub fn order_products<'a>(&'a self, order: &'a Order) -> impl Iterator<Item = &'a Product> {
        order.product_ids.iter().filter_map(|id| self.product(*id))
    }

    pub(crate) fn products_mut(&mut self) -> impl Iterator<Item = &mut Product> {
        self.products.iter_mut()
    }
}
