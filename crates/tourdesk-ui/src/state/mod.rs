//! Panel State Module
//!
//! The three cooperating pieces behind the Customers-by-Product panel:
//! catalog cache, search/selection controller and result aggregator, plus
//! the coordinator that keeps them consistent.

pub mod catalog;
pub mod panel;
pub mod results;
pub mod search;

pub use catalog::ProductCatalog;
pub use panel::{CustomerListState, SortColumn, SortSpec};
pub use results::{CustomerResults, ExportBlocked, ExportRequest};
pub use search::ProductSearch;
