#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;

use shortlink::api::handlers::{
    health_handler, redirect_handler, shorten_handler, stats_handler,
};
use shortlink::domain::entities::{NewShortUrl, ShortUrl};
use shortlink::domain::repositories::UrlRepository;
use shortlink::error::AppError;
use shortlink::prelude::ShortUrlService;
use shortlink::state::AppState;

/// In-memory [`UrlRepository`] implementation backing handler tests.
///
/// Mirrors the PostgreSQL repository's contract: token uniqueness among
/// non-deleted rows, `Ok(None)` for absent lookups, and a not-found error
/// when an increment matches zero rows.
pub struct InMemoryUrlRepository {
    rows: Mutex<Vec<ShortUrl>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored rows, soft-deleted included.
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Inserts a soft-deleted row directly, bypassing the create contract.
    pub fn insert_deleted(&self, token: &str, original: &str) {
        let now = Utc::now();
        self.rows.lock().unwrap().push(ShortUrl {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            short_token: token.to_string(),
            original: original.to_string(),
            click_count: 0,
            created_at: now,
            updated_at: now,
            deleted_at: Some(now),
        });
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|r| r.short_token == new_url.short_token && r.deleted_at.is_none())
        {
            return Err(AppError::conflict(
                "Short token already exists",
                "urls_short_token_key",
            ));
        }

        let now = Utc::now();
        let record = ShortUrl {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            short_token: new_url.short_token,
            original: new_url.original,
            click_count: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        rows.push(record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShortUrl>, AppError> {
        if token.is_empty() {
            return Err(AppError::invalid_argument(
                "Invalid request format",
                "short token is required",
            ));
        }

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.short_token == token && r.deleted_at.is_none())
            .cloned())
    }

    async fn increment_click_count(&self, token: &str) -> Result<u64, AppError> {
        if token.is_empty() {
            return Err(AppError::invalid_argument(
                "Invalid request format",
                "short token is required",
            ));
        }

        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.short_token == token && r.deleted_at.is_none())
        {
            Some(row) => {
                row.click_count += 1;
                row.updated_at = Utc::now();
                Ok(1)
            }
            None => Err(AppError::not_found(
                "Short URL not found",
                "no rows matched the short token",
            )),
        }
    }
}

/// Builds an [`AppState`] over an in-memory repository.
///
/// The pool is lazy and points at a closed port; only the health check
/// touches it.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let url_service = Arc::new(ShortUrlService::new(repository.clone()));

    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy("postgres://127.0.0.1:1/unused")
        .unwrap();

    let state = AppState {
        db: pool,
        url_service,
        localhost_exempt: true,
    };

    (state, repository)
}

/// Router with the full route table, minus server-level middleware.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{token}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state)
}
