//! Customers-by-Product Panel
//!
//! Filter bar (product search, date range, actions) over a sortable result
//! table with a running monetary total. The panel renders
//! `CustomerListState` and returns a `CustomerListAction`; the host performs
//! the actual lookup and CSV write.

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use tourdesk_types::CustomerRow;

use crate::format::{format_currency, format_date};
use crate::state::{CustomerListState, SortColumn};
use crate::widgets::product_search_box;

/// Action returned from panel interactions.
#[derive(Debug, Clone)]
pub enum CustomerListAction {
    /// No action
    None,
    /// User pressed "Show Customers" - the host reads the resolved product
    /// id and the raw date-range text and pushes rows back via
    /// `set_results`.
    ApplyFilter,
    /// Export preconditions passed - the host serializes the rows to CSV.
    Export {
        rows: Vec<CustomerRow>,
        product_name: String,
    },
}

/// Render the panel.
pub fn customer_list_panel(ui: &mut Ui, state: &mut CustomerListState) -> CustomerListAction {
    let mut action = CustomerListAction::None;

    // Header
    ui.horizontal(|ui| {
        ui.heading("Customers by Product");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{} customers", state.row_count()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
    });
    ui.separator();

    // Filter bar
    ui.horizontal(|ui| {
        ui.label("Product:");
        product_search_box(ui, state);

        ui.add_space(10.0);
        ui.label("From:");
        ui.add(
            egui::TextEdit::singleline(&mut state.date_from)
                .hint_text("YYYY-MM-DD")
                .desired_width(90.0),
        );
        ui.label("To:");
        ui.add(
            egui::TextEdit::singleline(&mut state.date_to)
                .hint_text("YYYY-MM-DD")
                .desired_width(90.0),
        );

        ui.add_space(10.0);
        if ui.button("Show Customers").clicked() {
            state.clear_warning();
            action = CustomerListAction::ApplyFilter;
        }
        if ui.button("Export CSV").clicked() {
            if let Some(request) = state.request_export() {
                action = CustomerListAction::Export {
                    rows: request.rows,
                    product_name: request.product_name,
                };
            }
        }
    });

    // Advisory warning (export preconditions)
    if let Some(warning) = state.warning() {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("⚠ {}", warning)).color(Color32::from_rgb(251, 191, 36)),
            );
        });
    }

    ui.separator();

    // Results
    if state.has_results() {
        render_results_table(ui, state);
        render_totals_row(ui, state);
    } else {
        ui.add_space(12.0);
        ui.label(
            RichText::new("No customers to display. Pick a product and apply the filter.")
                .color(Color32::GRAY)
                .italics(),
        );
    }

    action
}

/// Render the sortable result table.
fn render_results_table(ui: &mut Ui, state: &mut CustomerListState) {
    let rows = state.display_rows();
    let mut clicked: Option<SortColumn> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0))
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(100.0))
        .header(22.0, |mut header| {
            header.col(|ui| sort_header(ui, state, "Customer", SortColumn::Customer, &mut clicked));
            header.col(|ui| sort_header(ui, state, "Email", SortColumn::Email, &mut clicked));
            header.col(|ui| {
                sort_header(ui, state, "Purchases", SortColumn::Purchases, &mut clicked)
            });
            header.col(|ui| {
                sort_header(ui, state, "Total Spent", SortColumn::TotalSpent, &mut clicked)
            });
            header.col(|ui| {
                sort_header(
                    ui,
                    state,
                    "Last Purchase",
                    SortColumn::LastPurchase,
                    &mut clicked,
                )
            });
        })
        .body(|mut body| {
            for row in &rows {
                body.row(20.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.customer_name);
                    });
                    table_row.col(|ui| {
                        ui.label(&row.customer_email);
                    });
                    table_row.col(|ui| {
                        ui.label(row.purchase_count.to_string());
                    });
                    table_row.col(|ui| {
                        ui.label(format_currency(row.total_spent));
                    });
                    table_row.col(|ui| {
                        ui.label(format_date(row.last_purchase));
                    });
                });
            }
        });

    if let Some(column) = clicked {
        state.sort_by(column);
    }
}

/// Clickable column header with a direction marker on the active column.
fn sort_header(
    ui: &mut Ui,
    state: &CustomerListState,
    label: &str,
    column: SortColumn,
    clicked: &mut Option<SortColumn>,
) {
    let marker = match state.sort() {
        Some(spec) if spec.column == column => {
            if spec.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => "",
    };

    if ui
        .add(
            egui::Label::new(RichText::new(format!("{}{}", label, marker)).strong())
                .sense(egui::Sense::click()),
        )
        .on_hover_text("Click to sort")
        .clicked()
    {
        *clicked = Some(column);
    }
}

/// Running total under the table.
fn render_totals_row(ui: &mut Ui, state: &CustomerListState) {
    ui.separator();
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format_currency(state.total_spent()))
                    .strong()
                    .size(14.0),
            );
            ui.label(RichText::new("Total spent:").color(Color32::LIGHT_GRAY));
        });
    });
}
