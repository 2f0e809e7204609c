use crate::core::transcript::Transcript;

/// Instructions placed ahead of the participants and the conversation.
pub const SUMMARY_INSTRUCTIONS: &str = "\
Summarize the following chat conversation history.
Do not write the summary as a list. Split it into sections by context or topic and write clear prose of at most 1000 characters. Give each section a suitable Markdown heading (## or ###).
Whenever the summary needs to refer to a specific user, always use the Discord mention format `<@USER_ID>`.
Use the participant list, the `<@USER_ID>` tokens in the history, and the `<@USER_ID> (username)` annotations at the end of each line to find the right user ID for each mention.
End the summary with a section titled \"Task progress\". If any tasks are mentioned, list them under \"Completed tasks\" and \"Pending tasks\".
When the owner of a task is clear, write the Discord mention `<@USER_ID>` followed by a concrete description of the task.
Finally, if the text still contains plain usernames, remove them and keep only the `<@USER_ID>` mentions.";

/// Render the single prompt sent to the completion API.
#[must_use]
pub fn build_summary_prompt(transcript: &Transcript) -> String {
    format!(
        "{SUMMARY_INSTRUCTIONS}\n\n## Participants (user ID and username)\n{}\n\n## Conversation history\n{}\n\n## Summary\n",
        transcript.render_participants(),
        transcript.render_history(),
    )
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}
