//! End-to-end flow over the panel state, no toolkit involved:
//! catalog push -> incremental search -> lookup round trip -> totals ->
//! sorting -> export preconditions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tourdesk_types::{CustomerRow, Product, ProductId};
use tourdesk_ui::state::{CustomerListState, ExportBlocked, SortColumn};

fn push_catalog(state: &mut CustomerListState) -> (ProductId, ProductId) {
    let apple = Product::new(ProductId::new(), "Apple Tour");
    let beach = Product::new(ProductId::new(), "Beach Pass");
    let ids = (apple.id, beach.id);
    state.set_products(vec![beach, apple]);
    ids
}

fn rows() -> Vec<CustomerRow> {
    vec![
        CustomerRow {
            customer_name: "Ada Rossi".to_string(),
            customer_email: "ada@example.com".to_string(),
            purchase_count: 3,
            total_spent: Decimal::new(1050, 2),
            last_purchase: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
        },
        CustomerRow {
            customer_name: "Bruno Bianchi".to_string(),
            customer_email: "bruno@example.com".to_string(),
            purchase_count: 1,
            total_spent: Decimal::new(525, 2),
            last_purchase: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        },
    ]
}

#[test]
fn filter_search_results_export_round_trip() {
    let mut state = CustomerListState::new();
    let (_, beach_id) = push_catalog(&mut state);

    // Incremental search narrows to one candidate and auto-selects it.
    state.set_query("ea");
    assert_eq!(state.candidates(), ["Beach Pass"]);
    assert_eq!(state.selected_product_name(), Some("Beach Pass"));
    assert_eq!(state.selected_product_id(), Some(beach_id));

    // The host answers ApplyFilter with a result push.
    state.set_results(rows());
    assert_eq!(state.row_count(), 2);
    assert_eq!(state.total_spent(), Decimal::new(1575, 2));

    // Export hands back the displayed rows and the resolved display name.
    let request = state.request_export().expect("preconditions hold");
    assert_eq!(request.product_name, "Beach Pass");
    assert_eq!(request.rows.len(), 2);
    assert!(state.warning().is_none());
}

#[test]
fn empty_query_spans_the_whole_catalog() {
    let mut state = CustomerListState::new();
    push_catalog(&mut state);

    state.set_query("");
    assert_eq!(state.candidates(), ["Apple Tour", "Beach Pass"]);
    assert_eq!(state.selected_product_name(), Some("Apple Tour"));
}

#[test]
fn export_preconditions_block_without_reaching_the_host() {
    let mut state = CustomerListState::new();
    push_catalog(&mut state);

    // No data yet.
    assert!(state.request_export().is_none());
    assert_eq!(state.warning(), Some(ExportBlocked::NoData));

    // Rows present but the query matches nothing, so no selection.
    state.set_query("nonexistent");
    state.set_results(rows());
    assert!(state.request_export().is_none());
    assert_eq!(state.warning(), Some(ExportBlocked::NoProductSelected));

    // Recovering in place: narrowing again makes the export pass.
    state.set_query("beach");
    assert!(state.request_export().is_some());
}

#[test]
fn catalog_swap_invalidates_the_active_selection() {
    let mut state = CustomerListState::new();
    push_catalog(&mut state);
    state.set_query("beach");
    assert!(state.selected_product_id().is_some());

    state.set_products(vec![Product::new(ProductId::new(), "Harbor Cruise")]);
    assert_eq!(state.selected_product_id(), None);
    assert!(state.candidates().is_empty());
}

#[test]
fn sorting_reorders_display_without_touching_the_total() {
    let mut state = CustomerListState::new();
    push_catalog(&mut state);
    state.set_results(rows());
    let total = state.total_spent();

    state.sort_by(SortColumn::TotalSpent);
    let ascending = state.display_rows();
    assert_eq!(ascending[0].customer_name, "Bruno Bianchi");

    state.sort_by(SortColumn::TotalSpent);
    let descending = state.display_rows();
    assert_eq!(descending[0].customer_name, "Ada Rossi");

    assert_eq!(state.total_spent(), total);
    assert_eq!(state.row_count(), 2);
}
