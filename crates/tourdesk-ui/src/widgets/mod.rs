//! Reusable widgets
//!
//! - Product search box: free-text input with a live-filtered candidate
//!   popup, the presentation binding over the search controller.

mod search_select;

pub use search_select::product_search_box;
