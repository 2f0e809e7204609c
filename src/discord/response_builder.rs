//! Interaction-response payloads sent back to Discord.
//!
//! Discord expects every interaction to be answered with a JSON object whose
//! `type` selects the callback kind. Only the three callbacks this bot uses are
//! built here.

use serde_json::{Value, json};

use super::models::Embed;

/// Callback type 1: acknowledges a PING.
pub const PONG: u8 = 1;
/// Callback type 4: respond immediately with a message.
pub const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
/// Callback type 5: acknowledge now, edit the original response later.
pub const DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 5;

/// Accent color of the summary embed (deep sky blue).
pub const SUMMARY_EMBED_COLOR: u32 = 0x00_BF_FF;

#[must_use]
pub fn create_pong_payload() -> Value {
    json!({ "type": PONG })
}

/// Create a payload that answers the interaction with a plain message.
///
/// # Examples
///
/// ```
/// use recap::discord::response_builder::create_message_payload;
///
/// let payload = create_message_payload("Please enter a number of days (1 or more).");
/// assert_eq!(payload["type"], 4);
/// ```
#[must_use]
pub fn create_message_payload(content: &str) -> Value {
    json!({
        "type": CHANNEL_MESSAGE_WITH_SOURCE,
        "data": { "content": content }
    })
}

#[must_use]
pub fn create_deferred_payload() -> Value {
    json!({ "type": DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE })
}

#[must_use]
pub fn summary_embed(days: u32, summary: &str) -> Embed {
    Embed {
        title: format!("Summary of the past {days} days in this channel"),
        description: summary.to_string(),
        color: SUMMARY_EMBED_COLOR,
    }
}

/// Body for `PATCH /webhooks/{app}/{token}/messages/@original`.
#[must_use]
pub fn create_edit_original_payload(embed: &Embed) -> Value {
    json!({ "embeds": [embed] })
}
