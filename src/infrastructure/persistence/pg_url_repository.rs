//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str =
    "id, short_token, original, click_count, created_at, updated_at, deleted_at";

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Uses SQLx prepared statements with bound parameters; every statement is
/// independently atomic, no multi-statement transactions are used.
pub struct PgUrlRepository {
    pool: PgPool,
}

impl PgUrlRepository {
    /// Creates a new repository over a database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let record = sqlx::query_as::<_, ShortUrl>(&format!(
            "INSERT INTO urls (short_token, original) \
             VALUES ($1, $2) \
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&new_url.short_token)
        .bind(&new_url.original)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShortUrl>, AppError> {
        if token.is_empty() {
            return Err(AppError::invalid_argument(
                "Invalid request format",
                "short token is required",
            ));
        }

        let record = sqlx::query_as::<_, ShortUrl>(&format!(
            "SELECT {RECORD_COLUMNS} \
             FROM urls \
             WHERE short_token = $1 AND deleted_at IS NULL"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn increment_click_count(&self, token: &str) -> Result<u64, AppError> {
        if token.is_empty() {
            return Err(AppError::invalid_argument(
                "Invalid request format",
                "short token is required",
            ));
        }

        let result = sqlx::query(
            "UPDATE urls \
             SET click_count = click_count + 1, updated_at = NOW() \
             WHERE short_token = $1 AND deleted_at IS NULL",
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        let affected = result.rows_affected();
        if affected == 0 {
            return Err(AppError::not_found(
                "Short URL not found",
                "no rows matched the short token",
            ));
        }

        Ok(affected)
    }
}
