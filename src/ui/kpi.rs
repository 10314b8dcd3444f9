// src/ui/kpi.rs
use eframe::egui;

use crate::analysis::{average_rating, average_sales, total_sales, Snapshot};
use crate::utils::{format_currency, format_rating, rating_stars};

// The three KPI cards at the top of the dashboard. An empty filtered view is
// valid (no-match filter) and renders as blank values.
pub fn show_kpi_cards(ui: &mut egui::Ui, snapshot: &Snapshot) {
    let rows = &snapshot.filtered;

    ui.columns(3, |columns| {
        columns[0].group(|ui| {
            ui.label("Total Sales:");
            let value = if rows.is_empty() {
                "–".to_string()
            } else {
                format!("US $ {}", format_currency(total_sales(rows)))
            };
            ui.heading(value);
        });

        columns[1].group(|ui| {
            ui.label("Average Sales:");
            let value = match average_sales(rows) {
                Some(mean) => format!("US $ {}", format_currency(mean)),
                None => "–".to_string(),
            };
            ui.heading(value);
        });

        columns[2].group(|ui| {
            ui.label("Average Rating:");
            let value = match average_rating(rows) {
                Some(rating) => format!("{} {}", format_rating(rating), rating_stars(rating)),
                None => "–".to_string(),
            };
            ui.heading(value);
        });
    });
}
