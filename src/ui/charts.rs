// src/ui/charts.rs
use eframe::egui;

use crate::analysis::Snapshot;

// The two bar charts, built from the published snapshot only.
pub fn show_sales_charts(ui: &mut egui::Ui, snapshot: &Snapshot) {
    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.heading("Sales by Hour");
            let plot = egui_plot::Plot::new("sales_by_hour")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0);

            plot.show(ui, |plot_ui| {
                let bars: Vec<egui_plot::Bar> = snapshot
                    .sales_by_hour
                    .iter()
                    .map(|(hour, total)| {
                        egui_plot::Bar::new(*hour as f64, *total)
                            .name(format!("{:02}:00", hour))
                            .width(0.8)
                            .fill(egui::Color32::from_rgb(100, 150, 255))
                    })
                    .collect();

                plot_ui.bar_chart(egui_plot::BarChart::new(bars));
            });
        });

        columns[1].group(|ui| {
            ui.heading("Sales by Product Line");
            let plot = egui_plot::Plot::new("sales_by_product_line")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_x(0.0);

            plot.show(ui, |plot_ui| {
                let bars: Vec<egui_plot::Bar> = snapshot
                    .sales_by_product_line
                    .iter()
                    .enumerate()
                    .map(|(i, (line, total))| {
                        egui_plot::Bar::new(i as f64, *total)
                            .name(line)
                            .width(0.6)
                            .fill(egui::Color32::from_rgb(100, 200, 150))
                    })
                    .collect();

                plot_ui.bar_chart(egui_plot::BarChart::new(bars).horizontal());
            });
        });
    });
}
