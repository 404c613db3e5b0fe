use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::client::ClientState;
use portfolio_client::content::adapter::outgoing::console_prompt::ConsolePrompt;
use portfolio_client::shared::api::config::ApiConfig;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio client...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = ApiConfig::from_env();
    info!("Using API origin {}", config.base_url);

    let state = ClientState::from_config(&config, Arc::new(ConsolePrompt));

    state.startup_sync().await;

    let admin = state.session.read().await.is_admin();
    let profile = state.profile.read().await.profile().clone();
    info!(
        "Loaded portfolio of {} ({}); admin mode: {}",
        profile.name, profile.profession, admin
    );
    info!(
        "Content: {} skills, {} projects, {} qualifications, {} experience entries, {} achievements, {} certifications",
        state.skills.snapshot().await.len(),
        state.projects.snapshot().await.len(),
        state.qualifications.snapshot().await.len(),
        state.experience.snapshot().await.len(),
        state.achievements.snapshot().await.len(),
        state.certifications.snapshot().await.len(),
    );

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting portfolio client: {e}");
    }
}
