use chrono::{DateTime, Duration, Utc};

use crate::discord::DiscordMessage;

/// Start of the half-open window `[now - days, now)`.
#[must_use]
pub fn window_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Retains the messages that were written by people inside `[start, now)`.
///
/// Bot authors are dropped, as is anything stamped outside the window. Input
/// order is preserved.
#[must_use]
pub fn filter_history_messages(
    messages: Vec<DiscordMessage>,
    start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<DiscordMessage> {
    messages
        .into_iter()
        .filter(|msg| {
            let in_window = msg.timestamp >= start && msg.timestamp < now;
            in_window && !msg.author.is_bot()
        })
        .collect()
}
