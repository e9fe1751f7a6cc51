//! Revo - voice journaling app
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Revo v{}", env!("CARGO_PKG_VERSION"));

    let config = match revo::storage::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            let mut config = revo::storage::AppConfig::default();
            config.data_dir = revo::storage::config::get_data_dir();
            config
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 568.0])
            .with_title("Revo"),
        ..Default::default()
    };

    eframe::run_native(
        "Revo",
        options,
        Box::new(move |cc| Ok(Box::new(app::RevoApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
