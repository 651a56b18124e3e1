#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod fetch_worker;
mod views;

use std::path::Path;
use std::sync::Arc;

use app::DashboardApp;
use ce_app::{DashboardConfig, load_config};
use ce_client::HttpClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Optional first argument: path to a dashboard YAML config.
    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => DashboardConfig::default(),
    };
    tracing::info!(base_url = %config.api.base_url, "starting dashboard");

    let api = Arc::new(HttpClient::new(&config.api.base_url, config.api.timeout())?);
    let failure_policy = config.upload_failure;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Chemical Equipment Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Chemical Equipment Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, api, failure_policy)))),
    )?;
    Ok(())
}
