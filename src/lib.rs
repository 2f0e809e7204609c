//! Recap - a Discord bot that summarizes recent channel conversation using Gemini.
//!
//! This crate implements the bot as one HTTP service plus two one-shot tools:
//! 1. An interactions server that verifies Discord's signed webhooks, answers the
//!    `/summarize` command with a deferred response, and later edits that
//!    response with a generated summary
//! 2. `register-command` / `unregister-command`, which manage the slash command
//!    definition through Discord's REST API
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the `POST /interactions` endpoint
//! - ed25519-dalek for Discord request signatures
//! - reqwest for the Discord REST and Gemini `generateContent` calls
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use recap::bot::SummaryBot;
//! use recap::core::config::AppConfig;
//! use recap::core::models::SummaryTask;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     recap::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let bot = SummaryBot::new(&config);
//!
//!     let task = SummaryTask {
//!         correlation_id: "demo".into(),
//!         interaction_id: "1200000000000000000".into(),
//!         channel_id: "C12345678".into(),
//!         interaction_token: "interaction-token".into(),
//!         days: 2,
//!     };
//!     recap::worker::process_task(&bot, &task).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod bot;
pub mod core;
pub mod discord;
pub mod errors;
pub mod registrar;
pub mod utils;
pub mod worker;

pub use errors::BotError;

/// Configure structured logging with JSON format.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// recap::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
