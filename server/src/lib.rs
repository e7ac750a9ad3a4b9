//! Contact form that turns submitted details into a QR code phone wallpaper.

pub mod app;
pub mod config;
pub mod error;
pub mod server;
pub mod services;
pub mod template;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load environment and configuration, logging anything that looks off.
pub fn init_config() -> AppConfig {
    load_dotenv();

    let config = AppConfig::load();
    for warning in config.warnings() {
        tracing::warn!("Config: {warning}");
    }

    tracing::info!(
        port = config.server_port,
        static_dir = %config.static_dir.display(),
        template = %config.template_path.display(),
        "Settings loaded"
    );
    config
}
