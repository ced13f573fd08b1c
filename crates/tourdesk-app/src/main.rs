//! TourDesk native shell
//!
//! Hosts the Customers-by-Product panel over an in-memory purchase ledger.
//! The shell owns the data layer: it answers the panel's `ApplyFilter`
//! action with a ledger query and its `Export` action with a CSV write.

mod app;
mod export;
mod store;

use anyhow::anyhow;
use eframe::egui;
use tracing::info;

use crate::app::TourDeskApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    info!("starting TourDesk");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TourDesk - Customers by Product")
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TourDesk",
        native_options,
        Box::new(|cc| Ok(Box::new(TourDeskApp::new(cc)))),
    )
    .map_err(|e| anyhow!("failed to start TourDesk: {e}"))
}
