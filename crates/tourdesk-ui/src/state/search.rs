//! Search/Selection Controller
//!
//! Keeps three pieces of state mutually consistent: the free-text query, the
//! filtered candidate set and the active selection. Pure state machine with
//! no toolkit types, so every transition runs headlessly in tests.
//!
//! Candidate recomputation is synchronous and deterministic: the same query
//! against the same catalog always yields the same candidate set, in catalog
//! (sorted) order, with no additional ranking.

use tourdesk_types::ProductId;

use crate::state::ProductCatalog;

#[derive(Debug, Clone, Default)]
pub struct ProductSearch {
    query: String,
    candidates: Vec<String>,
    selected: Option<String>,
}

impl ProductSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Recompute the candidate set for a new query.
    ///
    /// Candidates are the catalog names containing the query as a
    /// case-insensitive substring. An empty query matches the whole catalog.
    ///
    /// Auto-select-first policy: whenever the recomputed candidate set is
    /// non-empty the first candidate becomes the active selection; when it is
    /// empty the selection is cleared. Documented behavior, not an incidental
    /// default.
    pub fn set_query(&mut self, query: impl Into<String>, catalog: &ProductCatalog) {
        self.query = query.into();
        self.recompute(catalog);
    }

    /// Re-run the current query after the catalog has been replaced.
    ///
    /// Must be called on every catalog push so the candidate set reflects the
    /// new catalog before the next read. Re-applies the auto-select-first
    /// policy.
    pub fn refresh(&mut self, catalog: &ProductCatalog) {
        self.recompute(catalog);
    }

    /// Explicit selection, e.g. a click on a candidate row.
    ///
    /// A name that resolves in the catalog pins the selection and ends the
    /// search session: the query is cleared and the candidate set falls back
    /// to the full catalog. A name that does not resolve leaves the selection
    /// absent.
    pub fn select_exact(&mut self, name: &str, catalog: &ProductCatalog) {
        self.query.clear();
        self.candidates = catalog.names().map(str::to_string).collect();
        self.selected = if catalog.resolve_id_by_name(name).is_some() {
            Some(name.to_string())
        } else {
            None
        };
    }

    /// Resolve the active selection against the catalog.
    ///
    /// `None` when nothing is selected or when the selected name no longer
    /// exists (the catalog changed after the text was typed).
    pub fn selected_product_id(&self, catalog: &ProductCatalog) -> Option<ProductId> {
        self.selected
            .as_deref()
            .and_then(|name| catalog.resolve_id_by_name(name))
    }

    fn recompute(&mut self, catalog: &ProductCatalog) {
        let needle = self.query.to_lowercase();
        self.candidates = catalog
            .names()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(str::to_string)
            .collect();
        self.selected = self.candidates.first().cloned();
    }
}

// ============================================================================
// TESTS
// ============================================================================
