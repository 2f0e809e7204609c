use std::env;
use std::path::{Path, PathBuf};

use crate::errors::BotError;

pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PORT: u16 = 3000;

/// Loads a `.env` file from the working directory or one of its parents.
///
/// Variables already set in the process environment are left untouched.
/// Returns the path of the file that was read, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Loads variables from the env file at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed.
pub fn load_dotenv_from(path: &Path) -> Result<(), BotError> {
    dotenvy::from_path(path)
        .map_err(|e| BotError::ConfigError(format!("{}: {e}", path.display())))
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_id: String,
    pub public_key: String,
    pub discord_token: String,
    pub gemini_api_key: Option<String>,
    pub discord_api_base: String,
    pub gemini_api_base: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the server configuration from an arbitrary variable source.
    ///
    /// `APP_ID`, `PUBLIC_KEY` and `DISCORD_TOKEN` are required; an empty value
    /// counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = ["APP_ID", "PUBLIC_KEY", "DISCORD_TOKEN"];
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| non_empty(&lookup, key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BotError::ConfigError(format!(
                "{} must be set in environment variables",
                missing.join(", ")
            )));
        }

        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| BotError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            app_id: non_empty(&lookup, "APP_ID").unwrap_or_default(),
            public_key: non_empty(&lookup, "PUBLIC_KEY").unwrap_or_default(),
            discord_token: non_empty(&lookup, "DISCORD_TOKEN").unwrap_or_default(),
            gemini_api_key: non_empty(&lookup, "GEMINI_API_KEY"),
            discord_api_base: api_base(&lookup, "DISCORD_API_BASE", DEFAULT_DISCORD_API_BASE),
            gemini_api_base: api_base(&lookup, "GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            port,
        })
    }
}

/// The subset of configuration the command registrar needs.
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    pub app_id: String,
    pub discord_token: String,
    pub discord_api_base: String,
}

impl RegistrarConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match (
            non_empty(&lookup, "APP_ID"),
            non_empty(&lookup, "DISCORD_TOKEN"),
        ) {
            (Some(app_id), Some(discord_token)) => Ok(Self {
                app_id,
                discord_token,
                discord_api_base: api_base(&lookup, "DISCORD_API_BASE", DEFAULT_DISCORD_API_BASE),
            }),
            _ => Err(BotError::ConfigError(
                "APP_ID and DISCORD_TOKEN must be set in environment variables".to_string(),
            )),
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn api_base<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key)
        .map_or_else(|| default.to_string(), |v| v.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn app_config_applies_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_ID", "123"),
            ("PUBLIC_KEY", "abcd"),
            ("DISCORD_TOKEN", "token"),
        ]))
        .expect("config");

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.discord_api_base, DEFAULT_DISCORD_API_BASE);
        assert_eq!(config.gemini_api_base, DEFAULT_GEMINI_API_BASE);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn app_config_names_every_missing_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ID", "123")])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PUBLIC_KEY"));
        assert!(msg.contains("DISCORD_TOKEN"));
        assert!(!msg.contains("APP_ID,"));
    }

    #[test]
    fn app_config_treats_blank_values_as_missing() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("APP_ID", "  "),
            ("PUBLIC_KEY", "abcd"),
            ("DISCORD_TOKEN", "token"),
        ]));
        assert!(matches!(result, Err(BotError::ConfigError(_))));
    }

    #[test]
    fn app_config_rejects_bad_port_and_trims_base_urls() {
        let base = [
            ("APP_ID", "123"),
            ("PUBLIC_KEY", "abcd"),
            ("DISCORD_TOKEN", "token"),
        ];

        let mut bad_port = base.to_vec();
        bad_port.push(("PORT", "not-a-port"));
        assert!(AppConfig::from_lookup(lookup_from(&bad_port)).is_err());

        let mut overrides = base.to_vec();
        overrides.push(("DISCORD_API_BASE", "http://127.0.0.1:9000/"));
        overrides.push(("PORT", "8080"));
        let config = AppConfig::from_lookup(lookup_from(&overrides)).expect("config");
        assert_eq!(config.discord_api_base, "http://127.0.0.1:9000");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn missing_env_file_is_a_config_error() {
        let path = env::temp_dir().join("recap-no-such-dir").join(".env");
        let err = load_dotenv_from(&path).unwrap_err();
        assert!(matches!(err, BotError::ConfigError(_)));
        assert!(err.to_string().contains("recap-no-such-dir"));
    }

    #[test]
    fn registrar_config_requires_app_id_and_token() {
        assert!(RegistrarConfig::from_lookup(lookup_from(&[("DISCORD_TOKEN", "t")])).is_err());
        assert!(RegistrarConfig::from_lookup(lookup_from(&[("APP_ID", "1")])).is_err());

        let config =
            RegistrarConfig::from_lookup(lookup_from(&[("APP_ID", "1"), ("DISCORD_TOKEN", "t")]))
                .expect("config");
        assert_eq!(config.app_id, "1");
        assert_eq!(config.discord_api_base, DEFAULT_DISCORD_API_BASE);
    }
}
