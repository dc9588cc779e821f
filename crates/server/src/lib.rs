pub mod clients;
pub mod config;
pub mod contact;
pub mod error;
pub mod live;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::BroadcastApi;
use crate::config::Config;

/// Builds the site router. `api` is shared by every live board session.
pub fn app(config: Config, api: Arc<dyn BroadcastApi>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Pages
        .route("/", get(routes::pages::index))
        .route("/partidas", get(routes::pages::live_games))
        .route("/contacto", get(routes::pages::contact))
        .route("/contacto/enviar", get(routes::contact::send_message))
        // Live boards
        .route("/ws/partidas", get(routes::live_ws::ws_handler))
        .route("/static/live-boards.js", get(routes::assets::live_boards_js))
        .fallback(routes::pages::not_found)
        // Shared state
        .layer(Extension(api))
        .layer(Extension(config))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
