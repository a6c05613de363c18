use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripai::config::TripAiConfig;
use tripai::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripAiConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    web::run(config).await
}
