pub mod agents;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;

pub use crate::agents::{Persona, PersonaRegistry};
pub use crate::config::Config;
pub use crate::error::{Error, GenerationError, Result};
pub use crate::providers::{GeminiGateway, ModelGateway};
pub use crate::state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Config::load()
}

/// Create the HTTP router
///
/// - `POST /bot` receives messaging provider webhooks
/// - `GET /health` reports liveness
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/bot", post(handlers::receive_message))
        .route("/health", get(handlers::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
