use anyhow::Result;
use learn_rest_api::config::AppConfig;
use learn_rest_api::server::ServerBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the YAML configuration file
const CONFIG_ENV: &str = "LEARN_REST_API_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            let config = AppConfig::from_yaml_file(&path)?;
            tracing::info!(path = %path, "Configuration loaded");
            config
        }
        Err(_) => {
            tracing::info!("{} not set, using default configuration", CONFIG_ENV);
            AppConfig::default()
        }
    };

    tracing::info!(
        address = %config.server.address(),
        base_url = %config.api.base_url,
        seeded_admin = config.accounts.default_admin.is_some(),
        "Starting learn-rest-api"
    );

    ServerBuilder::new().with_config(config).serve().await
}
