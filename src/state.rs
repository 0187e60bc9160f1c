//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::UrlService;

/// Immutable per-process state, cloned cheaply into every request.
#[derive(Clone)]
pub struct AppState {
    /// Pool handle kept for the health check; all data access goes through
    /// the service.
    pub db: PgPool,
    pub url_service: Arc<dyn UrlService>,
    /// When true, a candidate hostname of `localhost` bypasses the
    /// self-domain check on the create path.
    pub localhost_exempt: bool,
}
