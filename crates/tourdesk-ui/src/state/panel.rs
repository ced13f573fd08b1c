//! Customers-by-Product panel state
//!
//! `CustomerListState` owns the three cooperating pieces (catalog cache,
//! search controller, result aggregator) plus the presentation fields the
//! filter bar edits. Panels render this state and return actions; the host
//! pushes data in through it. All transitions are synchronous - a new push
//! discards the effect of anything in flight, there is no queuing.

use tourdesk_types::{CustomerRow, Product, ProductId};

use crate::state::{CustomerResults, ExportBlocked, ExportRequest, ProductCatalog, ProductSearch};

/// Column of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Customer,
    Email,
    Purchases,
    TotalSpent,
    LastPurchase,
}

/// Active sort: column plus direction.
///
/// Sorting is presentation-level reordering only - the host-supplied row set
/// and the running total are unaffected by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub ascending: bool,
}

impl SortSpec {
    /// Next sort after a click on `column`: first click sorts ascending,
    /// a second click on the same column flips direction.
    pub fn toggle(current: Option<SortSpec>, column: SortColumn) -> SortSpec {
        match current {
            Some(spec) if spec.column == column => SortSpec {
                column,
                ascending: !spec.ascending,
            },
            _ => SortSpec {
                column,
                ascending: true,
            },
        }
    }

    pub fn apply(&self, rows: &mut [CustomerRow]) {
        rows.sort_by(|a, b| {
            let ordering = match self.column {
                SortColumn::Customer => a.customer_name.cmp(&b.customer_name),
                SortColumn::Email => a.customer_email.cmp(&b.customer_email),
                SortColumn::Purchases => a.purchase_count.cmp(&b.purchase_count),
                SortColumn::TotalSpent => a.total_spent.cmp(&b.total_spent),
                SortColumn::LastPurchase => a.last_purchase.cmp(&b.last_purchase),
            };
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }
}

/// UI-only state of the product search box (popup visibility, text buffer,
/// keyboard highlight). Never authoritative - the search controller is.
#[derive(Debug, Clone, Default)]
pub struct SearchBoxUi {
    pub buffer: String,
    pub popup_open: bool,
    pub hide_after: Option<f64>,
    pub highlighted: usize,
}

pub struct CustomerListState {
    catalog: ProductCatalog,
    search: ProductSearch,
    results: CustomerResults,
    sort: Option<SortSpec>,
    warning: Option<ExportBlocked>,

    /// Raw date-range text, handed to the host untouched.
    pub date_from: String,
    pub date_to: String,

    pub(crate) search_box: SearchBoxUi,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerListState {
    pub fn new() -> Self {
        Self {
            catalog: ProductCatalog::new(),
            search: ProductSearch::new(),
            results: CustomerResults::new(),
            sort: None,
            warning: None,
            date_from: String::new(),
            date_to: String::new(),
            search_box: SearchBoxUi::default(),
        }
    }

    // Inbound: the host pushes data in, wholesale.

    /// Replace the product catalog and recompute the candidate set against
    /// the new catalog before the next read.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.catalog.set_products(products);
        self.search.refresh(&self.catalog);
    }

    /// Replace the displayed result set. Leaves the search state alone - a
    /// result push never clears an active search session.
    pub fn set_results(&mut self, rows: Vec<CustomerRow>) {
        self.results.set_results(rows);
        self.warning = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query, &self.catalog);
    }

    /// Explicit selection from the candidate popup.
    pub fn select_product(&mut self, name: &str) {
        self.search.select_exact(name, &self.catalog);
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn candidates(&self) -> &[String] {
        self.search.candidates()
    }

    pub fn selected_product_name(&self) -> Option<&str> {
        self.search.selected_name()
    }

    /// Resolved id of the active selection, read by the host on
    /// `ApplyFilter`.
    pub fn selected_product_id(&self) -> Option<ProductId> {
        self.search.selected_product_id(&self.catalog)
    }

    /// Raw date bounds as typed; `None` for blank fields. No parsing or
    /// validation happens here - that burden is the host's.
    pub fn date_range_raw(&self) -> (Option<&str>, Option<&str>) {
        fn clean(s: &str) -> Option<&str> {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        (clean(&self.date_from), clean(&self.date_to))
    }

    pub fn row_count(&self) -> usize {
        self.results.len()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn total_spent(&self) -> rust_decimal::Decimal {
        self.results.total_spent()
    }

    /// Rows in current display order (host order, then the active sort).
    pub fn display_rows(&self) -> Vec<CustomerRow> {
        let mut rows = self.results.rows().to_vec();
        if let Some(sort) = self.sort {
            sort.apply(&mut rows);
        }
        rows
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Header click on a column.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = Some(SortSpec::toggle(self.sort, column));
    }

    /// Run the export precondition check.
    ///
    /// On success returns the payload (rows in display order plus the
    /// resolved product name) and clears any previous warning; on failure
    /// records the advisory warning for the panel to display and returns
    /// `None` - the host is not invoked.
    pub fn request_export(&mut self) -> Option<ExportRequest> {
        match self.results.request_export(self.search.selected_name()) {
            Ok(mut request) => {
                if let Some(sort) = self.sort {
                    sort.apply(&mut request.rows);
                }
                self.warning = None;
                Some(request)
            }
            Err(blocked) => {
                self.warning = Some(blocked);
                None
            }
        }
    }

    pub fn warning(&self) -> Option<ExportBlocked> {
        self.warning
    }

    pub fn clear_warning(&mut self) {
        self.warning = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================
