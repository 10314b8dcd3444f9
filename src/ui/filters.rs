// src/ui/filters.rs
use eframe::egui;

use crate::data::DashboardContext;
use crate::state::FilterSelection;

// The three multi-select dropdowns. Returns true when any value was toggled;
// the caller is responsible for refreshing the controller afterwards.
pub fn show_filter_row(
    ui: &mut egui::Ui,
    context: &DashboardContext,
    selection: &mut FilterSelection,
) -> bool {
    let mut changed = false;

    ui.columns(3, |columns| {
        changed |= multi_select(&mut columns[0], "Select cities", &context.cities, &mut selection.cities);
        changed |= multi_select(
            &mut columns[1],
            "Select customer types",
            &context.customer_types,
            &mut selection.customer_types,
        );
        changed |= multi_select(&mut columns[2], "Select genders", &context.genders, &mut selection.genders);
    });

    changed
}

fn multi_select(
    ui: &mut egui::Ui,
    label: &str,
    choices: &[String],
    selected: &mut Vec<String>,
) -> bool {
    let summary = if selected.len() == choices.len() {
        "All".to_string()
    } else if selected.is_empty() {
        "None".to_string()
    } else {
        selected.join(", ")
    };

    let mut changed = false;
    egui::ComboBox::from_label(label)
        .selected_text(summary)
        .width(180.0)
        .show_ui(ui, |ui| {
            for choice in choices {
                let mut checked = selected.contains(choice);
                if ui.checkbox(&mut checked, choice).changed() {
                    if checked {
                        selected.push(choice.clone());
                    } else {
                        selected.retain(|value| value != choice);
                    }
                    changed = true;
                }
            }
        });

    changed
}
