use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::YearRange;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – year-range control and summary block
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Year range");
    ui.separator();

    let Some((lo, hi)) = state.year_bounds else {
        ui.label("No dataset loaded.");
        return;
    };
    let current = state.range.unwrap_or(YearRange::new(lo, hi));

    let mut min = current.min;
    let mut max = current.max;
    let mut changed = false;

    changed |= ui
        .add(egui::Slider::new(&mut min, lo..=hi).text("From"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut max, lo..=hi).text("To"))
        .changed();

    if changed {
        // YearRange::new swaps the ends if the sliders cross.
        state.set_range(YearRange::new(min, max));
    }

    ui.add_space(8.0);
    ui.heading("Summary");
    ui.separator();
    summary_block(ui, state);
}

/// The plain-text statistics block under the sliders.
fn summary_block(ui: &mut Ui, state: &AppState) {
    let summary = &state.view.summary;

    if summary.total_fires == 0 {
        ui.label(RichText::new("No fires in the selected range.").italics());
        return;
    }

    ui.label(format!("Total fires: {}", summary.total_fires));
    ui.label(format!("Burned area: {:.0} ha", summary.total_area_ha));

    if let Some((year, count)) = summary.peak_year_by_count {
        ui.label(format!("Peak year by fires: {year} ({count} fires)"));
    }
    if let Some((year, area)) = summary.peak_year_by_area {
        ui.label(format!("Peak year by area: {year} ({area:.0} ha)"));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_data = state.dataset.is_some();
            if ui
                .add_enabled(has_data, egui::Button::new("Export view…"))
                .clicked()
            {
                export_view_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.tab == Tab::Dashboard, "Dashboard")
            .clicked()
        {
            state.tab = Tab::Dashboard;
        }
        if ui
            .selectable_label(state.tab == Tab::CircleMatrix, "Circle Matrix")
            .clicked()
        {
            state.tab = Tab::CircleMatrix;
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} fires loaded, {} in range",
                ds.len(),
                state.view.summary.total_fires
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open fire dataset")
        .add_filter("Supported files", &["geojson", "json", "csv"])
        .add_filter("GeoJSON", &["geojson", "json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_dataset(&path) {
            Ok(dataset) => {
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Save the currently rendered views (time series, map points, grid,
/// summary) as a JSON file.
pub fn export_view_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export dashboard data")
        .set_file_name("fire_atlas_view.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        let result = serde_json::to_string_pretty(&state.view)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(&path, json).map_err(anyhow::Error::from));
        match result {
            Ok(()) => log::info!("Exported dashboard data to {}", path.display()),
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
