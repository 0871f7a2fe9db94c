use thiserror::Error;

/// Convenience result type for catalog construction and loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type returned when building or loading a [`crate::types::Catalog`].
///
/// Queries themselves never fail; only construction does. The integrity
/// variants describe datasets the query layer cannot answer over: grouping and
/// count queries rely on unique identifiers, and every order→product reference
/// must resolve.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share an identifier.
    #[error("duplicate product id {0}")]
    DuplicateProductId(u32),

    /// Two orders share an identifier.
    #[error("duplicate order id {0}")]
    DuplicateOrderId(u32),

    /// An order lists a product id that is not in the product collection.
    #[error("order {order_id} references unknown product {product_id}")]
    UnknownProduct { order_id: u32, product_id: u32 },
}
