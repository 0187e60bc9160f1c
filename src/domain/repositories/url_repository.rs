//! Repository trait for short URL data access.

use async_trait::async_trait;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;

/// Repository interface for short URL mappings.
///
/// Soft-deleted rows are invisible to every operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests use an
///   in-memory implementation (see `tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_token` collides with an
    /// existing non-deleted row, [`AppError::Internal`] on other database
    /// errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a mapping by its short token.
    ///
    /// Absence of a matching non-deleted row is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `token` is empty,
    /// [`AppError::Internal`] on database errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically increments the click count of the matching row by one.
    ///
    /// The increment is a single storage-side update expression
    /// (`click_count = click_count + 1`), never a read-modify-write, so
    /// concurrent redirects of the same token cannot lose an increment.
    /// Returns the number of affected rows (always 1 on success).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `token` is empty,
    /// [`AppError::NotFound`] if no row matched, [`AppError::Internal`] on
    /// database errors.
    async fn increment_click_count(&self, token: &str) -> Result<u64, AppError>;
}
