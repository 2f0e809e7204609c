use crate::ai::LlmClient;
use crate::core::config::AppConfig;
use crate::discord::DiscordClient;

/// The Discord and Gemini clients a summary job needs, built once at startup.
#[derive(Debug, Clone)]
pub struct SummaryBot {
    app_id: String,
    discord_client: DiscordClient,
    llm_client: LlmClient,
}

impl SummaryBot {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let discord_client = DiscordClient::new(
            config.discord_api_base.clone(),
            config.discord_token.clone(),
        );
        let llm_client = LlmClient::new(
            config.gemini_api_key.clone(),
            config.gemini_api_base.clone(),
        );

        Self {
            app_id: config.app_id.clone(),
            discord_client,
            llm_client,
        }
    }

    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    #[must_use]
    pub fn discord_client(&self) -> &DiscordClient {
        &self.discord_client
    }

    #[must_use]
    pub fn llm_client(&self) -> &LlmClient {
        &self.llm_client
    }
}
