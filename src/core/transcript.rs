//! Turns a page of Discord history into a chronological transcript plus the
//! table of everyone who appears in it.

use chrono::{DateTime, Utc};

use super::models::{ChatMessage, ChatUser, ParticipantTable};
use crate::discord::{DiscordMessage, DiscordUser};
use crate::utils::filters::{filter_history_messages, window_start};

/// Rendered in place of the participant list when nobody qualifies.
pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "(no participant information)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Oldest first.
    pub messages: Vec<ChatMessage>,
    pub participants: ParticipantTable,
}

impl Transcript {
    /// Build a transcript from a newest-first history page, keeping only
    /// human messages from the last `days` days before `now`.
    #[must_use]
    pub fn from_history(history: Vec<DiscordMessage>, days: u32, now: DateTime<Utc>) -> Self {
        let start = window_start(now, days);
        let mut messages: Vec<ChatMessage> = filter_history_messages(history, start, now)
            .into_iter()
            .map(normalize)
            .collect();
        messages.reverse();

        let mut participants = ParticipantTable::new();
        for message in &messages {
            participants.insert(&message.author);
            for mention in &message.mentions {
                participants.insert(mention);
            }
        }

        Self {
            messages,
            participants,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// One `- <@id> (name)` line per participant, or the placeholder.
    #[must_use]
    pub fn render_participants(&self) -> String {
        let rendered = self
            .participants
            .iter()
            .map(|user| format!("- {}", mention_with_name(user)))
            .collect::<Vec<_>>()
            .join("\n");
        let rendered = rendered.trim();
        if rendered.is_empty() {
            NO_PARTICIPANTS_PLACEHOLDER.to_string()
        } else {
            rendered.to_string()
        }
    }

    /// One line per message in chronological order.
    #[must_use]
    pub fn render_history(&self) -> String {
        self.messages
            .iter()
            .map(render_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn normalize(message: DiscordMessage) -> ChatMessage {
    ChatMessage {
        content: message.content,
        author: to_chat_user(message.author),
        mentions: message.mentions.into_iter().map(to_chat_user).collect(),
        mention_everyone: message.mention_everyone,
    }
}

fn to_chat_user(user: DiscordUser) -> ChatUser {
    ChatUser {
        id: user.id,
        username: user.username,
    }
}

fn mention_with_name(user: &ChatUser) -> String {
    format!("<@{}> ({})", user.id, user.username)
}

fn render_line(message: &ChatMessage) -> String {
    let mut line = format!("{}: {}", mention_with_name(&message.author), message.content);
    if message.mention_everyone {
        line.push_str(" (mentions everyone)");
    }
    if !message.mentions.is_empty() {
        let mentioned = message
            .mentions
            .iter()
            .map(mention_with_name)
            .collect::<Vec<_>>()
            .join(", ");
        line.push_str(&format!(" (mentions: {mentioned})"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_line_appends_everyone_marker_before_mentions() {
        let message = ChatMessage {
            content: "standup in 5".to_string(),
            author: ChatUser {
                id: "U1".to_string(),
                username: "Alice".to_string(),
            },
            mentions: vec![
                ChatUser {
                    id: "U2".to_string(),
                    username: "Bob".to_string(),
                },
                ChatUser {
                    id: "U3".to_string(),
                    username: "Carol".to_string(),
                },
            ],
            mention_everyone: true,
        };

        assert_eq!(
            render_line(&message),
            "<@U1> (Alice): standup in 5 (mentions everyone) (mentions: <@U2> (Bob), <@U3> (Carol))"
        );
    }
}
