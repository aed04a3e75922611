//! ObjectFlow - node-graph object editor canvas

mod app;
mod logging_setup;

use anyhow::{anyhow, Context, Result};
use objectflow_core::AppSettings;
use objectflow_ui::{GraphSurface, Theme, ThemeConfig};

use app::ObjectFlowApp;

fn main() -> Result<()> {
    let settings = AppSettings::default();
    let _log_guard = logging_setup::init(&settings.log_config)?;

    let surface = GraphSurface::with_defaults().context("Failed to build graph surface")?;
    let theme = ThemeConfig {
        theme: if settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        },
        ..ThemeConfig::default()
    };

    tracing::info!("Starting ObjectFlow");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("ObjectFlow"),
        ..Default::default()
    };

    eframe::run_native(
        "ObjectFlow",
        native_options,
        Box::new(move |cc| Ok(Box::new(ObjectFlowApp::new(cc, theme, surface)))),
    )
    .map_err(|e| anyhow!("eframe exited with error: {e}"))
}
