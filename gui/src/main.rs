// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;
use state::app_state::AppState;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = AppConfig::load_default().inspect_err(|e| {
        tracing::error!("Failed to load default configuration: {:#}", e);
    })?;
    tracing::info!("Loaded default configuration version {}.", app_config.version);

    let app_state = AppState::from_config(&app_config).inspect_err(|e| {
        tracing::error!("Invalid dashboard configuration: {:#}", e);
    })?;
    tracing::info!(
        data_dir = %app_state.service.settings().data_dir.display(),
        "Starting {} (Dioxus Desktop)...",
        app_config.app.title
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.window_width, app_config.app.window_height)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(desktop_config).with_context(app_state).launch(App);

    tracing::info!("{} finished.", app_config.app.title);
    Ok(())
}
