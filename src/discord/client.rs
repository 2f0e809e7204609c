//! Discord REST API client
//!
//! Encapsulates every Discord REST call the bot makes: channel history,
//! follow-up edits and application-command management. Calls are made exactly
//! once; a non-success status is surfaced as [`BotError::DiscordApiError`].

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, info};

use super::models::{CommandDefinition, DiscordMessage, Embed, RegisteredCommand};
use super::response_builder::create_edit_original_payload;
use crate::errors::BotError;

/// Upper bound Discord accepts for a single history page.
pub const HISTORY_PAGE_LIMIT: u8 = 100;

/// Discord API client authenticated with a bot token.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: Client,
    api_base: String,
    token: String,
}

impl DiscordClient {
    #[must_use]
    pub fn new(api_base: String, token: String) -> Self {
        Self {
            http: Client::new(),
            api_base,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Bot {}", self.token))
    }

    async fn ensure_success(response: Response) -> Result<Response, BotError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {e}>"));
        Err(BotError::DiscordApiError {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetch one page of messages posted before `before_id`, newest first.
    ///
    /// Only a single page of [`HISTORY_PAGE_LIMIT`] messages is requested, so
    /// long windows over busy channels are truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, Discord answers with a
    /// non-success status, or the body is not a message array.
    pub async fn get_messages_before(
        &self,
        channel_id: &str,
        before_id: &str,
    ) -> Result<Vec<DiscordMessage>, BotError> {
        let request = self
            .http
            .get(self.url(&format!("/channels/{channel_id}/messages")))
            .query(&[
                ("before", before_id.to_string()),
                ("limit", HISTORY_PAGE_LIMIT.to_string()),
            ]);
        let response = self.authorized(request).send().await?;
        let response = Self::ensure_success(response).await?;
        let messages: Vec<DiscordMessage> = response.json().await?;

        debug!(
            channel_id = %channel_id,
            count = messages.len(),
            "Fetched channel history page"
        );
        Ok(messages)
    }

    /// Replace the deferred "thinking" response with an embed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Discord rejects the edit.
    pub async fn edit_original_response(
        &self,
        app_id: &str,
        interaction_token: &str,
        embed: &Embed,
    ) -> Result<(), BotError> {
        let request = self
            .http
            .patch(self.url(&format!(
                "/webhooks/{app_id}/{interaction_token}/messages/@original"
            )))
            .json(&create_edit_original_payload(embed));
        let response = self.authorized(request).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or Discord rejects the command.
    pub async fn create_command(
        &self,
        app_id: &str,
        command: &CommandDefinition,
    ) -> Result<(), BotError> {
        let request = self
            .http
            .post(self.url(&format!("/applications/{app_id}/commands")))
            .json(command);
        let response = self.authorized(request).send().await?;
        Self::ensure_success(response).await?;
        info!(command = command.name, "Registered application command");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the listing cannot be parsed.
    pub async fn list_commands(&self, app_id: &str) -> Result<Vec<RegisteredCommand>, BotError> {
        let request = self
            .http
            .get(self.url(&format!("/applications/{app_id}/commands")));
        let response = self.authorized(request).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or Discord refuses the deletion.
    pub async fn delete_command(&self, app_id: &str, command_id: &str) -> Result<(), BotError> {
        let request = self
            .http
            .delete(self.url(&format!("/applications/{app_id}/commands/{command_id}")));
        let response = self.authorized(request).send().await?;
        Self::ensure_success(response).await?;
        info!(command_id = %command_id, "Deleted application command");
        Ok(())
    }
}
