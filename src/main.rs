// src/main.rs
use anyhow::Result;
use eframe::egui;
use log::warn;

mod api;
mod app;
mod settings;
mod state;
mod theme;
mod ui;
mod utils;

use app::CloudOptimizerApp;
use settings::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("CloudOptimizer"),
        ..Default::default()
    };

    eframe::run_native(
        "CloudOptimizer",
        options,
        Box::new(move |cc| Box::new(CloudOptimizerApp::new(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
