mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::FireAtlasApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path as the first CLI argument; without it the app
    // starts empty and the user loads via File → Open.
    let dataset = std::env::args().nth(1).map(PathBuf::from).map(|path| {
        match data::loader::load_dataset(&path) {
            Ok(ds) => ds,
            Err(e) => {
                // The dashboard cannot run without its startup dataset.
                log::error!("Failed to load {}: {e:#}", path.display());
                std::process::exit(1);
            }
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fire Atlas – Wildfire Dashboard",
        options,
        Box::new(|_cc| {
            let app = match dataset {
                Some(ds) => FireAtlasApp::with_dataset(ds),
                None => FireAtlasApp::default(),
            };
            Ok(Box::new(app))
        }),
    )
}
