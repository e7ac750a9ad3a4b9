use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::{api, assets};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        // --- Contact form ---
        .route("/", get(api::form::show_form).post(api::form::submit_form))
        // --- Generated wallpapers ---
        .route("/static/", get(assets::static_index))
        .route("/static/{*path}", get(assets::static_file))
        // --- Middleware ---
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
