//! Entry point for the egui-based InsightForge dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use insightforge::api::provider_for;
use insightforge::config::{self, AppConfig};
use insightforge::egui_app::controller::DashboardController;
use insightforge::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use insightforge::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default configuration: {err}");
            AppConfig::default()
        }
    };

    let provider = provider_for(&config);
    let mut controller = DashboardController::new(provider, config.review_limit);
    controller.begin_initial_load();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1200.0, 840.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "InsightForge",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}
