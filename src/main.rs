mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{default_webview_data_dir, AppConfig};

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "daily_journal=info".into()),
        )
        .init();

    let config = AppConfig::from_env().expect("should resolve journal configuration");
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");
    tracing::info!(db = %config.db_path.display(), language = config.language.code(), "starting daily journal");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Daily Journal"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}
