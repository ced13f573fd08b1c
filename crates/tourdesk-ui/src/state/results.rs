//! Result Table & Aggregator
//!
//! Holds the host-supplied customer rows currently displayed and the running
//! monetary total. Rows are replaced wholesale; the total is recomputed from
//! scratch on every replacement so it can never drift from the row set.

use rust_decimal::Decimal;
use thiserror::Error;
use tourdesk_types::CustomerRow;

/// Advisory conditions that block an export request.
///
/// Both recover in place: the user sees a warning, nothing reaches the host
/// and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportBlocked {
    #[error("There is no data to export. Apply a filter first.")]
    NoData,
    #[error("Select a product before exporting.")]
    NoProductSelected,
}

/// Payload handed to the host once the export preconditions pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub rows: Vec<CustomerRow>,
    pub product_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerResults {
    rows: Vec<CustomerRow>,
    total_spent: Decimal,
}

impl CustomerResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed row set.
    ///
    /// The total is recomputed as the exact `Decimal` sum over the new rows,
    /// never patched incrementally. An empty set is valid input: the table
    /// clears and the total is zero.
    pub fn set_results(&mut self, rows: Vec<CustomerRow>) {
        self.total_spent = rows.iter().map(|row| row.total_spent).sum();
        tracing::debug!(
            rows = rows.len(),
            total = %self.total_spent,
            "result set replaced"
        );
        self.rows = rows;
    }

    pub fn rows(&self) -> &[CustomerRow] {
        &self.rows
    }

    pub fn total_spent(&self) -> Decimal {
        self.total_spent
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check the export preconditions and build the payload for the host.
    ///
    /// Requires at least one displayed row and a resolved, non-empty product
    /// name - checked in that order. A violated precondition yields the
    /// matching advisory warning and the host is never invoked.
    pub fn request_export(
        &self,
        product_name: Option<&str>,
    ) -> Result<ExportRequest, ExportBlocked> {
        if self.rows.is_empty() {
            tracing::warn!("export requested with no data");
            return Err(ExportBlocked::NoData);
        }
        let product_name = match product_name {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::warn!("export requested with no product selected");
                return Err(ExportBlocked::NoProductSelected);
            }
        };
        Ok(ExportRequest {
            rows: self.rows.clone(),
            product_name: product_name.to_string(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(name: &str, cents: i64) -> CustomerRow {
        CustomerRow {
            customer_name: name.to_string(),
            customer_email: format!("{}@example.com", name.to_lowercase()),
            purchase_count: 1,
            total_spent: Decimal::new(cents, 2),
            last_purchase: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_total_is_exact_sum() {
        let mut results = CustomerResults::new();
        results.set_results(vec![row("Ada", 1050), row("Bruno", 525)]);
        assert_eq!(results.total_spent(), Decimal::new(1575, 2));
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut forward = CustomerResults::new();
        let mut reversed = CustomerResults::new();
        forward.set_results(vec![row("Ada", 1050), row("Bruno", 525), row("Carla", 999)]);
        reversed.set_results(vec![row("Carla", 999), row("Bruno", 525), row("Ada", 1050)]);
        assert_eq!(forward.total_spent(), reversed.total_spent());
    }

    #[test]
    fn test_empty_replacement_clears_table_and_total() {
        let mut results = CustomerResults::new();
        results.set_results(vec![row("Ada", 1050)]);
        results.set_results(Vec::new());

        assert!(results.is_empty());
        assert_eq!(results.total_spent(), Decimal::ZERO);
    }

    #[test]
    fn test_total_recomputed_on_every_replacement() {
        let mut results = CustomerResults::new();
        results.set_results(vec![row("Ada", 1050)]);
        results.set_results(vec![row("Bruno", 525)]);
        assert_eq!(results.total_spent(), Decimal::new(525, 2));
    }

    #[test]
    fn test_export_with_no_data_is_blocked() {
        let results = CustomerResults::new();
        assert_eq!(
            results.request_export(Some("Beach Pass")),
            Err(ExportBlocked::NoData)
        );
    }

    #[test]
    fn test_export_with_no_product_is_blocked() {
        let mut results = CustomerResults::new();
        results.set_results(vec![row("Ada", 1050)]);

        assert_eq!(
            results.request_export(None),
            Err(ExportBlocked::NoProductSelected)
        );
        assert_eq!(
            results.request_export(Some("")),
            Err(ExportBlocked::NoProductSelected)
        );
    }

    #[test]
    fn test_no_data_wins_when_both_preconditions_fail() {
        let results = CustomerResults::new();
        assert_eq!(results.request_export(None), Err(ExportBlocked::NoData));
    }

    #[test]
    fn test_export_hands_over_rows_and_product_name() {
        let mut results = CustomerResults::new();
        results.set_results(vec![row("Ada", 1050), row("Bruno", 525)]);

        let request = results.request_export(Some("Beach Pass")).unwrap();
        assert_eq!(request.product_name, "Beach Pass");
        assert_eq!(request.rows.len(), 2);
        assert_eq!(request.rows[0].customer_name, "Ada");
    }
}
