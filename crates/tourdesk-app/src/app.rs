//! TourDesk application shell
//!
//! Owns the panel state and the data layer, and reacts to the actions the
//! panel returns: `ApplyFilter` becomes a ledger query pushed back via
//! `set_results`, `Export` becomes a CSV write.

use chrono::NaiveDate;
use eframe::egui;
use tracing::{debug, error, info, warn};

use tourdesk_types::{CustomerRow, FilterCriteria};
use tourdesk_ui::{customer_list_panel, CustomerListAction, CustomerListState};

use crate::export::write_customer_csv;
use crate::store::PurchaseLedger;

pub struct TourDeskApp {
    customer_list: CustomerListState,
    ledger: PurchaseLedger,
    status: Option<String>,
}

impl TourDeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let ledger = PurchaseLedger::sample();
        let mut customer_list = CustomerListState::new();
        customer_list.set_products(ledger.products());

        Self {
            customer_list,
            ledger,
            status: None,
        }
    }

    fn apply_filter(&mut self) {
        let Some(product_id) = self.customer_list.selected_product_id() else {
            warn!("filter applied with no resolvable product selection");
            return;
        };
        let (from_raw, to_raw) = self.customer_list.date_range_raw();
        let criteria = FilterCriteria {
            product_id,
            date_from: from_raw.map(str::to_string),
            date_to: to_raw.map(str::to_string),
        };

        let from = criteria.date_from.as_deref().and_then(parse_date);
        let to = criteria.date_to.as_deref().and_then(parse_date);
        let rows = self.ledger.customers_for(criteria.product_id, from, to);
        info!(rows = rows.len(), product = %criteria.product_id, "filter applied");

        self.customer_list.set_results(rows);
        self.status = None;
    }

    fn export(&mut self, rows: Vec<CustomerRow>, product_name: String) {
        match write_customer_csv(std::path::Path::new("."), &rows, &product_name) {
            Ok(path) => {
                info!(path = %path.display(), rows = rows.len(), "exported customer list");
                self.status = Some(format!("Exported {} rows to {}", rows.len(), path.display()));
            }
            Err(err) => {
                error!(error = %err, "CSV export failed");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }
}

impl eframe::App for TourDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tourdesk_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("TourDesk");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(status) = &self.status {
                        ui.label(egui::RichText::new(status).size(11.0));
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match customer_list_panel(ui, &mut self.customer_list) {
                CustomerListAction::None => {}
                CustomerListAction::ApplyFilter => self.apply_filter(),
                CustomerListAction::Export { rows, product_name } => {
                    self.export(rows, product_name)
                }
            }
        });
    }
}

/// Host-side date parsing for the raw range text. Accepts ISO dates and the
/// `dd/mm/yyyy` the panel displays; anything else is treated as unbounded.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|err| debug!(raw, %err, "ignoring unparsable date bound"))
        .ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_both_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(parse_date("2026-03-07"), Some(expected));
        assert_eq!(parse_date("07/03/2026"), Some(expected));
    }

    #[test]
    fn test_parse_date_ignores_garbage() {
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2026-13-40"), None);
    }
}
