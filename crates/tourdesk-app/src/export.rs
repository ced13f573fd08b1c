//! CSV export
//!
//! Serializes the rows handed over by the panel. Column order mirrors the
//! on-screen table: customer name, email, purchase count, total spent, last
//! purchase date.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tourdesk_types::CustomerRow;
use tourdesk_ui::format::format_date;

/// Write `rows` to `<dir>/customers_<product>.csv` and return the path.
pub fn write_customer_csv(
    dir: &Path,
    rows: &[CustomerRow],
    product_name: &str,
) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("customers_{}.csv", slug(product_name)));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["Customer", "Email", "Purchases", "Total Spent", "Last Purchase"])?;
    for row in rows {
        let purchases = row.purchase_count.to_string();
        let spent = format!("{:.2}", row.total_spent);
        let last = format_date(row.last_purchase);
        writer.write_record([
            row.customer_name.as_str(),
            row.customer_email.as_str(),
            purchases.as_str(),
            spent.as_str(),
            last.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(path)
}

/// Filesystem-safe file name fragment from a product display name.
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![CustomerRow {
            customer_name: "Ada Rossi".to_string(),
            customer_email: "ada@example.com".to_string(),
            purchase_count: 3,
            total_spent: Decimal::new(1575, 2),
            last_purchase: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
        }];

        let path = write_customer_csv(dir.path(), &rows, "Beach Pass").unwrap();
        assert_eq!(path.file_name().unwrap(), "customers_beach_pass.csv");

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Customer,Email,Purchases,Total Spent,Last Purchase"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Ada Rossi,ada@example.com,3,15.75,14/02/2026"
        );
    }

    #[test]
    fn test_slug_sanitizes_display_names() {
        assert_eq!(slug("Beach Pass"), "beach_pass");
        assert_eq!(slug("Café & Bistro Tour"), "caf____bistro_tour");
    }
}
