use recap::core::config;
use recap::registrar::{self, RegistrarAction};

#[tokio::main]
async fn main() {
    let _ = config::load_dotenv();
    recap::setup_logging();

    let code = registrar::run(RegistrarAction::Unregister, |key| std::env::var(key).ok()).await;
    std::process::exit(code);
}
