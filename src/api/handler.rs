//! Interactions endpoint - verifies, parses and routes Discord interactions.
//!
//! This module handles:
//! - Request validation (signature headers, Ed25519 signature)
//! - PING handshakes
//! - The `summarize` application command (deferred response + background job)

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers::{err_response, ok_json, unauthorized};
use super::parsing::{
    INVALID_DAYS_MESSAGE, SUMMARIZE_COMMAND, get_header_value, parse_days, parse_interaction,
};
use super::server::AppState;
use super::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER, verify_discord_signature};
use crate::core::models::SummaryTask;
use crate::discord::response_builder::{
    create_deferred_payload, create_message_payload, create_pong_payload,
};
use crate::discord::{Interaction, InteractionType};
use crate::worker;

/// Axum handler for `POST /interactions`.
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_interaction(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // ========================================================================
    // Verify Discord signature
    // ========================================================================

    let Some(signature) = get_header_value(&headers, SIGNATURE_HEADER) else {
        warn!("Missing {} header", SIGNATURE_HEADER);
        return unauthorized();
    };
    let Some(timestamp) = get_header_value(&headers, TIMESTAMP_HEADER) else {
        warn!("Missing {} header", TIMESTAMP_HEADER);
        return unauthorized();
    };
    if let Err(e) = verify_discord_signature(&state.public_key, signature, timestamp, &body) {
        warn!("Rejected interaction: {}", e);
        return unauthorized();
    }

    // ========================================================================
    // Route by interaction type
    // ========================================================================

    let interaction = match parse_interaction(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            error!("{}", e);
            return err_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let kind = interaction.kind;
    match kind {
        InteractionType::Ping => ok_json(create_pong_payload()),
        InteractionType::ApplicationCommand => handle_application_command(&state, interaction),
        InteractionType::MessageComponent
        | InteractionType::ApplicationCommandAutocomplete
        | InteractionType::ModalSubmit => {
            warn!(?kind, "Unsupported interaction type");
            err_response(
                StatusCode::BAD_REQUEST,
                &format!("Unsupported interaction type: {kind:?}"),
            )
        }
    }
}

fn handle_application_command(state: &AppState, interaction: Interaction) -> Response {
    let Some(data) = interaction.data.as_ref() else {
        return err_response(StatusCode::BAD_REQUEST, "Application command without data");
    };

    if data.name != SUMMARIZE_COMMAND {
        warn!(command = %data.name, "Unknown application command");
        return ok_json(create_message_payload(&format!(
            "Unknown command: {}",
            data.name
        )));
    }

    let Some(days) = parse_days(data) else {
        info!("Rejected summarize command without a valid days option");
        return ok_json(create_message_payload(INVALID_DAYS_MESSAGE));
    };

    let (Some(channel_id), Some(interaction_token)) =
        (interaction.channel_id.clone(), interaction.token.clone())
    else {
        return err_response(
            StatusCode::BAD_REQUEST,
            "Application command without channel_id or token",
        );
    };

    let task = SummaryTask {
        correlation_id: Uuid::new_v4().to_string(),
        interaction_id: interaction.id,
        channel_id,
        interaction_token,
        days,
    };
    info!(
        correlation_id = %task.correlation_id,
        channel_id = %task.channel_id,
        days,
        "Deferring summarize command"
    );

    worker::spawn_task(state.bot.clone(), task);
    ok_json(create_deferred_payload())
}
