//! LLM (Gemini) API client module
//!
//! Encapsulates the single `generateContent` call used to produce summaries.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::prompt_builder::estimate_tokens;
use crate::errors::BotError;

/// Model used for every summary.
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// LLM API client for generating summaries
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    api_base: String,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: Option<String>, api_base: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            api_base,
            model_name: GEMINI_MODEL.to_string(),
        }
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model_name
        )
    }

    /// Submit `prompt` as a single user turn and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured, the HTTP request fails,
    /// Gemini answers with a non-success status, or the response has no text.
    pub async fn generate_summary(&self, prompt: &str) -> Result<String, BotError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(BotError::MissingApiKey);
        };

        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        info!(
            model = %self.model_name,
            estimated_input_tokens = estimate_tokens(prompt),
            "Generating summary"
        );

        let response = self
            .http
            .post(self.generate_content_url())
            .query(&[("key", api_key)])
            .json(&build_generate_content_body(prompt))
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BotError::GeminiError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| BotError::GeminiError(format!("Failed to read Gemini response: {e}")))?;
        parse_generate_content_response(&raw)
    }
}

fn build_generate_content_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": prompt } ] }
        ]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn parse_generate_content_response(raw: &str) -> Result<String, BotError> {
    let parsed: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| BotError::GeminiError(format!("Failed to parse Gemini response: {e}")))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(BotError::GeminiError(
            "No text in Gemini response".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let raw = r###"{"candidates":[
            {"content":{"role":"model","parts":[{"text":"## Deploy\n"},{"text":"Shipped."}]}},
            {"content":{"role":"model","parts":[{"text":"ignored"}]}}
        ]}"###;
        assert_eq!(
            parse_generate_content_response(raw).expect("text"),
            "## Deploy\nShipped."
        );
    }

    #[test]
    fn rejects_response_without_candidates() {
        let err = parse_generate_content_response(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .unwrap_err();
        assert!(matches!(err, BotError::GeminiError(_)));
    }

    #[test]
    fn request_body_wraps_prompt_as_single_user_turn() {
        let body = build_generate_content_body("hello");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["contents"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn url_targets_fixed_model() {
        let client = LlmClient::new(None, "https://example.test/v1beta/".to_string());
        assert_eq!(
            client.generate_content_url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
