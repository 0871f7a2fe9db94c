//! Data provider boundary: loading a [`crate::types::Catalog`].
//!
//! Most callers should use [`load_catalog`], which:
//!
//! - deserializes a JSON store document into a validated catalog
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Callers constructing collections in code can go straight to
//! [`crate::types::Catalog::new`]; loading is a convenience on top of it.

pub mod json;
pub mod observability;

use std::fmt;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Catalog;

pub use json::catalog_from_json;
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver,
};

/// Options controlling [`load_catalog`] behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a catalog from a JSON store document.
///
/// `source` is a caller-supplied label (a path, a URL, "inline", ...) used only
/// for observer context.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with collection-size stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >=
///   `options.alert_at_or_above`
pub fn load_catalog(source: &str, input: &str, options: &LoadOptions) -> CatalogResult<Catalog> {
    let result = json::catalog_from_json(input);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            source: source.to_string(),
        };
        match &result {
            Ok(catalog) => {
                obs.on_success(
                    &ctx,
                    LoadStats {
                        products: catalog.products().len(),
                        orders: catalog.orders().len(),
                        customers: catalog.customers().len(),
                    },
                );
            }
            Err(e) => {
                let severity = classify_severity(e);
                obs.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    obs.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result
}

/// Classify a load failure for observer reporting.
///
/// Malformed JSON means this payload could not be read (`Error`); integrity
/// violations mean the dataset itself is bad (`Critical`).
fn classify_severity(error: &CatalogError) -> LoadSeverity {
    match error {
        CatalogError::Json(_) => LoadSeverity::Error,
        CatalogError::DuplicateProductId(_)
        | CatalogError::DuplicateOrderId(_)
        | CatalogError::UnknownProduct { .. } => LoadSeverity::Critical,
    }
}
