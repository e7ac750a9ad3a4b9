//! Server binary.
//!
//! Initializes tracing, loads configuration and serves the contact form.

use tracing_subscriber::EnvFilter;

use vcard_wallpaper_lib::app::SharedState;
use vcard_wallpaper_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting contact wallpaper server");

    let config = vcard_wallpaper_lib::init_config();
    let state = SharedState::new(config);

    server::start_server(state).await?;

    tracing::info!("Server stopped");
    Ok(())
}
