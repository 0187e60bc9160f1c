//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, and the Axum server lifecycle.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use crate::application::services::ShortUrlService;
use crate::config::Config;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Attempts the initial connection up to this many times while the database
/// spins up (e.g. in a compose environment).
const CONNECT_ATTEMPTS: usize = 10;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the PostgreSQL connection pool (with startup retry), applies
/// migrations, wires the repository and service, and serves until ctrl-c.
///
/// # Errors
///
/// Returns an error if the database remains unreachable, migrations fail,
/// or the server cannot bind.
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let repository = Arc::new(PgUrlRepository::new(pool.clone()));
    let url_service = Arc::new(ShortUrlService::new(repository));

    let state = AppState {
        db: pool,
        url_service,
        localhost_exempt: config.localhost_exempt,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Connects the pool, retrying on a fixed one-second interval.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let strategy = FixedInterval::from_millis(1_000).take(CONNECT_ATTEMPTS - 1);

    let pool = Retry::spawn(strategy, || async {
        let result = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await;

        if result.is_err() {
            tracing::warn!("Retrying database connection");
        }

        result
    })
    .await?;

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
