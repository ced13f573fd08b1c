//! TourDesk UI - Customers by Product panel
//!
//! The panel splits into a pure state core and an egui presentation layer:
//!
//! - [`state`] holds the product catalog cache, the search/selection
//!   controller and the result aggregator. No toolkit types; every transition
//!   is testable headlessly.
//! - [`panels`] and [`widgets`] render that state and report user intent as
//!   returned action values. They do NOT own host data - product catalogs and
//!   result sets are pushed in wholesale by the host shell.

pub mod format;
pub mod panels;
pub mod state;
pub mod widgets;

pub use panels::{customer_list_panel, CustomerListAction};
pub use state::CustomerListState;
