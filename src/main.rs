//! IPL Insights - Match & Delivery Analysis Dashboard
//!
//! Loads the matches and deliveries tables once and renders one analysis at a time.

use anyhow::{Context, Result};
use eframe::egui;
use ipl_insights::config::Settings;
use ipl_insights::gui::InsightsApp;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let settings = Settings::load().context("loading settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;

    let sources = settings.sources();
    tracing::info!(data_dir = %settings.data_dir.display(), "Starting IPL Insights");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("IPL Insights"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "IPL Insights",
        options,
        Box::new(move |cc| Ok(Box::new(InsightsApp::new(cc, sources)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
