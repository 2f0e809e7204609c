use tracing::info;

use super::{Stage, TaskError};
use crate::bot::SummaryBot;
use crate::core::models::SummaryTask;
use crate::discord::response_builder::summary_embed;

/// Replace the deferred acknowledgment with the summary embed.
///
/// # Errors
///
/// Returns [`Stage::Deliver`] if Discord rejects the edit.
pub async fn deliver_summary(
    bot: &SummaryBot,
    task: &SummaryTask,
    summary: &str,
) -> Result<(), TaskError> {
    let embed = summary_embed(task.days, summary);
    bot.discord_client()
        .edit_original_response(bot.app_id(), &task.interaction_token, &embed)
        .await
        .map_err(|source| TaskError::new(Stage::Deliver, source))?;

    info!(
        correlation_id = %task.correlation_id,
        channel_id = %task.channel_id,
        "Summary delivered"
    );
    Ok(())
}
