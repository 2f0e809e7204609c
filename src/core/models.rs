/// A user reference as it appears in a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub id: String,
    pub username: String,
}

/// A historical message normalized for summarization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
    pub author: ChatUser,
    pub mentions: Vec<ChatUser>,
    pub mention_everyone: bool,
}

/// User id to display name, in first-seen order.
///
/// Inserting an id that is already present keeps the original name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantTable {
    entries: Vec<ChatUser>,
}

impl ParticipantTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the user was newly added.
    pub fn insert(&mut self, user: &ChatUser) -> bool {
        if self.contains(&user.id) {
            return false;
        }
        self.entries.push(user.clone());
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatUser> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A validated request to summarize a channel, carried from the interaction
/// endpoint to the background job.
#[derive(Debug, Clone)]
pub struct SummaryTask {
    pub correlation_id: String,
    pub interaction_id: String,
    pub channel_id: String,
    pub interaction_token: String,
    pub days: u32,
}
