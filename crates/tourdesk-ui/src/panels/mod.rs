//! UI Panels
//!
//! Each panel is a function that takes `&mut Ui` and `&mut` panel state.
//! Panels render UI and report user intent by returning an action value;
//! the host shell reacts to the action. They do NOT own host data.

mod customer_list;

pub use customer_list::{customer_list_panel, CustomerListAction};
