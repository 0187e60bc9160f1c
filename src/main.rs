use anyhow::Result;
use tracing_subscriber::EnvFilter;

use shortlink::config::{self, Environment};
use shortlink::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Non-production environments read a local .env file before the
    // configuration is loaded.
    if Environment::from_env() != Environment::Production {
        dotenvy::dotenv().ok();
    }

    let config = config::load_from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    server::run(config).await
}
