//! One-shot registration of the `summarize` slash command.

use tracing::{error, info};

use crate::core::config::RegistrarConfig;
use crate::discord::DiscordClient;
use crate::discord::models::{CommandDefinition, CommandOptionDefinition};
use crate::errors::BotError;

/// Application command type 1: chat input (slash) command.
const CHAT_INPUT_COMMAND: u8 = 1;
/// Option type 4: integer.
const INTEGER_OPTION: u8 = 4;

/// The command definition submitted on registration.
#[must_use]
pub fn summarize_command() -> CommandDefinition {
    CommandDefinition {
        name: "summarize",
        description: "Summarize the conversation from the past specified number of days",
        kind: CHAT_INPUT_COMMAND,
        options: vec![CommandOptionDefinition {
            name: "days",
            description: "Number of days to summarize",
            kind: INTEGER_OPTION,
            required: true,
        }],
    }
}

fn client_for(config: &RegistrarConfig) -> DiscordClient {
    DiscordClient::new(
        config.discord_api_base.clone(),
        config.discord_token.clone(),
    )
}

/// # Errors
///
/// Returns an error if Discord rejects the registration.
pub async fn register(config: &RegistrarConfig) -> Result<(), BotError> {
    client_for(config)
        .create_command(&config.app_id, &summarize_command())
        .await
}

/// Delete every command registered for the application, in listing order.
///
/// Stops at the first failed deletion.
///
/// # Errors
///
/// Returns an error if the listing or any deletion fails.
pub async fn unregister(config: &RegistrarConfig) -> Result<(), BotError> {
    let client = client_for(config);
    let commands = client.list_commands(&config.app_id).await?;
    info!(count = commands.len(), "Unregistering application commands");

    for command in &commands {
        info!(command_id = %command.id, name = %command.name, "Deleting command");
        client.delete_command(&config.app_id, &command.id).await?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrarAction {
    Register,
    Unregister,
}

/// Load configuration from `lookup`, perform `action`, and map the outcome to
/// a process exit status (0 on success, 1 on any failure).
///
/// Missing configuration fails before any request is made. A rejected request
/// has its response body logged verbatim.
pub async fn run<F>(action: RegistrarAction, lookup: F) -> i32
where
    F: Fn(&str) -> Option<String>,
{
    let config = match RegistrarConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let result = match action {
        RegistrarAction::Register => register(&config).await,
        RegistrarAction::Unregister => unregister(&config).await,
    };

    match result {
        Ok(()) => 0,
        Err(BotError::DiscordApiError { status, body }) => {
            error!(status, "Discord rejected the request");
            eprintln!("{body}");
            1
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
