use chrono::Utc;
use tracing::{error, info};

use super::{TaskError, deliver, summarize};
use crate::bot::SummaryBot;
use crate::core::models::SummaryTask;

/// Summarize and deliver one task.
///
/// # Errors
///
/// Returns the first failing stage. Nothing is reported back to the user.
pub async fn process_task(bot: &SummaryBot, task: &SummaryTask) -> Result<(), TaskError> {
    info!(
        correlation_id = %task.correlation_id,
        channel_id = %task.channel_id,
        days = task.days,
        "Processing summary task"
    );

    let summary = summarize::summarize_task(bot, task, Utc::now()).await?;
    deliver::deliver_summary(bot, task, &summary).await
}

/// Run a task in the background, logging any failure.
///
/// The deferred response is left untouched on failure; Discord times it out.
pub fn spawn_task(bot: SummaryBot, task: SummaryTask) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = process_task(&bot, &task).await {
            error!(
                correlation_id = %task.correlation_id,
                stage = %e.stage,
                "Summary task failed: {}",
                e.source
            );
        }
    })
}
