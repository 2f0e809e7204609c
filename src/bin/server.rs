use anyhow::Context;
use recap::api;
use recap::core::config::{self, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = config::load_dotenv();
    recap::setup_logging();
    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = AppConfig::from_env().context("failed to load configuration")?;
    api::serve(&config).await?;
    Ok(())
}
