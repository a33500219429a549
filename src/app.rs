use eframe::egui;

use crate::data::model::FireDataset;
use crate::state::{AppState, Tab};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FireAtlasApp {
    pub state: AppState,
}

impl FireAtlasApp {
    /// Start with a dataset already loaded (startup path was given).
    pub fn with_dataset(dataset: FireDataset) -> Self {
        let mut state = AppState::default();
        state.set_dataset(dataset);
        Self { state }
    }
}

impl Default for FireAtlasApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for FireAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and view tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year range and summary ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a fire dataset to begin  (File → Open…)");
                });
                return;
            }
            match self.state.tab {
                Tab::Dashboard => {
                    ui.columns(2, |cols| {
                        plot::timeseries_plot(&mut cols[0], &self.state);
                        plot::map_plot(&mut cols[1], &self.state);
                    });
                }
                Tab::CircleMatrix => {
                    plot::circle_matrix(ui, &self.state);
                }
            }
        });
    }
}
