// src/ui/table.rs
use eframe::egui;

use crate::data::Transaction;
use crate::utils::format_rating;

// Scrollable grid of the filtered transactions.
pub fn show_transactions(ui: &mut egui::Ui, rows: &[Transaction]) {
    ui.group(|ui| {
        ui.heading(format!("Transactions ({})", rows.len()));

        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .auto_shrink([false, true])
            .show_rows(ui, row_height, rows.len(), |ui, visible| {
                egui::Grid::new("transactions_grid")
                    .num_columns(7)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("City");
                        ui.strong("Customer type");
                        ui.strong("Gender");
                        ui.strong("Product line");
                        ui.strong("Time");
                        ui.strong("Total");
                        ui.strong("Rating");
                        ui.end_row();

                        for transaction in &rows[visible] {
                            ui.label(&transaction.city);
                            ui.label(&transaction.customer_type);
                            ui.label(&transaction.gender);
                            ui.label(&transaction.product_line);
                            ui.label(transaction.time.format("%H:%M:%S").to_string());
                            ui.label(format!("{:.2}", transaction.total));
                            ui.label(format_rating(transaction.rating));
                            ui.end_row();
                        }
                    });
            });
    });
}
