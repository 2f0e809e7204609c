use axum::http::HeaderMap;
use serde_json::Value;

use crate::discord::Interaction;
use crate::discord::models::CommandData;
use crate::errors::BotError;

pub const SUMMARIZE_COMMAND: &str = "summarize";
pub const DAYS_OPTION: &str = "days";

/// Shown when the `days` option is missing or not a positive integer.
pub const INVALID_DAYS_MESSAGE: &str = "Please enter a number of days (1 or more).";

/// # Errors
///
/// Returns [`BotError::ParseError`] if the body is not an interaction object.
pub fn parse_interaction(body: &[u8]) -> Result<Interaction, BotError> {
    serde_json::from_slice(body)
        .map_err(|e| BotError::ParseError(format!("Invalid interaction body: {e}")))
}

/// Read the `days` option as a positive integer.
///
/// Discord sends integer options as JSON numbers; anything else, including
/// zero, negatives and fractions, is rejected.
#[must_use]
pub fn parse_days(data: &CommandData) -> Option<u32> {
    match data.option(DAYS_OPTION)? {
        Value::Number(n) => n
            .as_u64()
            .filter(|days| *days >= 1)
            .and_then(|days| u32::try_from(days).ok()),
        _ => None,
    }
}

pub fn get_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data_with(options: Value) -> CommandData {
        serde_json::from_value(json!({ "name": "summarize", "options": options }))
            .expect("command data")
    }

    #[test]
    fn parses_positive_integer_days() {
        let data = data_with(json!([{ "name": "days", "value": 3, "type": 4 }]));
        assert_eq!(parse_days(&data), Some(3));
    }

    #[test]
    fn rejects_missing_zero_negative_and_non_numeric_days() {
        assert_eq!(parse_days(&data_with(json!([]))), None);
        assert_eq!(parse_days(&data_with(json!([{ "name": "days", "value": 0 }]))), None);
        assert_eq!(parse_days(&data_with(json!([{ "name": "days", "value": -2 }]))), None);
        assert_eq!(parse_days(&data_with(json!([{ "name": "days", "value": 1.5 }]))), None);
        assert_eq!(parse_days(&data_with(json!([{ "name": "days", "value": "two" }]))), None);
        assert_eq!(parse_days(&data_with(json!([{ "name": "days" }]))), None);
    }

    #[test]
    fn ignores_other_options() {
        let data = data_with(json!([{ "name": "hours", "value": 5 }]));
        assert_eq!(parse_days(&data), None);
    }

    #[test]
    fn interaction_without_options_parses() {
        let interaction =
            parse_interaction(br#"{"type":2,"id":"1","data":{"name":"summarize"}}"#)
                .expect("interaction");
        let data = interaction.data.expect("data");
        assert!(data.options.is_empty());
    }

    #[test]
    fn unknown_interaction_type_is_a_parse_error() {
        assert!(matches!(
            parse_interaction(br#"{"type":42,"id":"1"}"#),
            Err(BotError::ParseError(_))
        ));
    }
}
