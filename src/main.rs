mod about;
mod app_icon;
mod assets;
mod build_info;
mod clip_history;
mod components;
mod config;
mod input_method;
mod licenses;
mod links;
mod navigation;
mod notify;
mod services;
mod state;
mod theme;
mod utils;
mod window;

use clap::Parser;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::build_info::{VersionInfo, BUILD_DATE};
use crate::config::{Config, CONFIG};
use crate::navigation::Route;

static VERSION: LazyLock<String> =
    LazyLock::new(|| format!("{} (built {})", VersionInfo::current(), BUILD_DATE));

/// FlorisBoard settings
#[derive(Parser, Debug)]
#[command(
    version = VERSION.as_str(),
    about,
    long_about = "FlorisBoard settings\n\n\
        Opens the settings window of the FlorisBoard keyboard on its About page.",
    after_long_help = "Examples:\n\
        \x20 florisboard-settings                              Open the About page\n\
        \x20 florisboard-settings --route third-party-licenses Open the third-party licenses\n\
        \x20 florisboard-settings --config ./config.json       Use a specific config file"
)]
struct Cli {
    /// Page to open
    #[arg(long, value_enum, default_value_t = Route::About)]
    route: Route,

    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() {
    // Parse CLI arguments first (before any other initialization)
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    if let Some(path) = cli.config {
        config::set_config_path(path);
    }
    write_default_config_if_missing();
    navigation::set_initial_route(cli.route);

    let (window_config, theme) = {
        let config = CONFIG.read();
        (config.window.clone(), config.theme)
    };
    tracing::info!(
        version = %VersionInfo::current(),
        route = ?cli.route,
        "Starting settings window"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window::create_settings_window_config(&window_config, theme))
        .launch(components::settings_app::SettingsApp);
}

/// Write the defaults on first launch so the config file can be discovered and edited
fn write_default_config_if_missing() {
    let path = Config::path();
    if path.exists() {
        return;
    }
    if let Err(e) = CONFIG.read().save_to(&path) {
        tracing::warn!(%e, "Failed to write default configuration");
    }
}

fn init_tracing() {
    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer);

    // On macOS, also log to Console.app via oslog
    #[cfg(target_os = "macos")]
    let registry =
        registry.with(tracing_oslog::OsLogger::new("org.florisboard.settings", "default"));

    registry.init();
}
