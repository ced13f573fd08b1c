//! Product Catalog Cache
//!
//! Read-only cached copy of the host's product list. The host replaces it
//! wholesale on every push; the cache keeps it sorted by name so candidate
//! ordering in the search controller is stable and deterministic.

use tourdesk_types::{Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list.
    ///
    /// Sorts by name with plain case-sensitive `str` ordering - the same
    /// comparator the search controller's candidate ordering relies on.
    /// Callable at any time, including before any user interaction; an empty
    /// list is valid input.
    pub fn set_products(&mut self, mut products: Vec<Product>) {
        products.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = products.len(), "product catalog replaced");
        self.products = products;
    }

    /// Exact, case-sensitive name lookup.
    ///
    /// Returns `None` for empty or unmatched input. Duplicate names resolve
    /// to the first match in sorted order.
    pub fn resolve_id_by_name(&self, name: &str) -> Option<ProductId> {
        if name.is_empty() {
            return None;
        }
        self.products.iter().find(|p| p.name == name).map(|p| p.id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
