use chrono::{DateTime, Utc};
use tracing::info;

use super::{Stage, TaskError};
use crate::ai::build_summary_prompt;
use crate::bot::SummaryBot;
use crate::core::models::SummaryTask;
use crate::core::transcript::Transcript;

/// Fetch the history page, condense it and ask the model for a summary.
///
/// An empty transcript is still summarized; the prompt then carries the
/// participant placeholder and an empty history.
///
/// # Errors
///
/// Returns the failing stage if the history fetch or the completion call fails.
pub async fn summarize_task(
    bot: &SummaryBot,
    task: &SummaryTask,
    now: DateTime<Utc>,
) -> Result<String, TaskError> {
    let history = bot
        .discord_client()
        .get_messages_before(&task.channel_id, &task.interaction_id)
        .await
        .map_err(|source| TaskError::new(Stage::FetchHistory, source))?;
    let fetched = history.len();

    let transcript = Transcript::from_history(history, task.days, now);
    info!(
        correlation_id = %task.correlation_id,
        fetched,
        kept = transcript.messages.len(),
        participants = transcript.participants.len(),
        "Built transcript"
    );

    let prompt = build_summary_prompt(&transcript);
    bot.llm_client()
        .generate_summary(&prompt)
        .await
        .map_err(|source| TaskError::new(Stage::GenerateSummary, source))
}
