use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use ed25519_dalek::VerifyingKey;
use tokio::net::TcpListener;
use tracing::info;

use super::handler::handle_interaction;
use super::signature::parse_public_key;
use crate::bot::SummaryBot;
use crate::core::config::AppConfig;
use crate::errors::BotError;

pub const INTERACTIONS_PATH: &str = "/interactions";

/// Immutable per-process state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub public_key: VerifyingKey,
    pub bot: SummaryBot,
}

impl AppState {
    /// # Errors
    ///
    /// Returns a configuration error if `PUBLIC_KEY` is not a valid Ed25519 key.
    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        Ok(Self {
            public_key: parse_public_key(&config.public_key)?,
            bot: SummaryBot::new(config),
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(INTERACTIONS_PATH, post(handle_interaction))
        .with_state(state)
}

/// Bind `0.0.0.0:{port}` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the key is invalid, the port cannot be bound, or the
/// server stops unexpectedly.
pub async fn serve(config: &AppConfig) -> Result<(), BotError> {
    let state = Arc::new(AppState::from_config(config)?);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| BotError::ConfigError(format!("failed to bind {addr}: {e}")))?;

    info!(%addr, path = INTERACTIONS_PATH, "Server is running");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| BotError::HttpError(format!("server exited unexpectedly: {e}")))
}
