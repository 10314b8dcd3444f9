// src/main.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use eframe::egui;

mod analysis;
mod app;
mod data;
mod state;
mod ui;
mod utils;

use app::DashboardApp;

const DEFAULT_DATA_PATH: &str = "supermarket_sales.xlsx";

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    // Startup-only load; a missing or malformed source file is fatal.
    let context = data::loader::load_context(&path)
        .with_context(|| format!("Failed to load sales data from {}", path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Sales Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Dashboard",
        options,
        Box::new(move |_cc| Box::new(DashboardApp::new(context))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
