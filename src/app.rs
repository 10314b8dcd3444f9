// src/app.rs
use eframe::egui;

use crate::data::DashboardContext;
use crate::state::{FilterController, Notification};
use crate::ui;

pub struct DashboardApp {
    controller: FilterController,
    notification: Option<Notification>,
}

impl DashboardApp {
    pub fn new(context: DashboardContext) -> Self {
        Self {
            controller: FilterController::new(context),
            notification: None,
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("📊 Sales Dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_dark_light_mode_switch(ui);
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::kpi::show_kpi_cards(ui, self.controller.snapshot());
            ui.separator();

            // Disjoint field borrows: the selection is edited while the
            // choice lists are read.
            let changed = ui::filters::show_filter_row(
                ui,
                &self.controller.context,
                &mut self.controller.selection,
            );
            if changed {
                if let Some(notification) = self.controller.refresh() {
                    self.notification = Some(notification);
                }
            }

            ui.separator();
            ui::charts::show_sales_charts(ui, self.controller.snapshot());
            ui.separator();
            ui::table::show_transactions(ui, &self.controller.snapshot().filtered);
        });

        // Notification modal, dismissed explicitly
        let notification = self.notification.clone();
        if let Some(notification) = notification {
            egui::Window::new(notification.title())
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&notification.message);
                    if ui.button("OK").clicked() {
                        self.notification = None;
                    }
                });
        }
    }
}
