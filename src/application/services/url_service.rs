//! Short URL creation, lookup, and redirect service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::token_generator::generate_short_token;

/// Business operations over short URL mappings.
///
/// Handlers depend on this trait rather than a concrete service so the
/// business logic can be substituted independently of storage in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlService: Send + Sync {
    /// Creates a short token for `original`, or returns the existing record
    /// when the same URL was already shortened.
    async fn create_short_token(&self, original: &str) -> Result<ShortUrl, AppError>;

    /// Looks up a record by token; absence is a not-found failure.
    async fn find_by_token(&self, token: &str) -> Result<ShortUrl, AppError>;

    /// Resolves a token for redirecting and counts the visit.
    async fn redirect(&self, token: &str) -> Result<ShortUrl, AppError>;
}

/// Default [`UrlService`] implementation over a [`UrlRepository`].
pub struct ShortUrlService {
    repository: Arc<dyn UrlRepository>,
}

impl ShortUrlService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UrlService for ShortUrlService {
    /// # Idempotency
    ///
    /// The token is a pure function of `original`, so a repeated create for
    /// the same URL finds the existing row and returns it unchanged; the same
    /// input never produces two rows.
    ///
    /// The lookup-then-insert sequence is not atomic: two concurrent creates
    /// for the same URL can both miss the lookup, and the storage uniqueness
    /// constraint fails the losing insert with a conflict. That conflict is
    /// propagated to the caller, not retried.
    async fn create_short_token(&self, original: &str) -> Result<ShortUrl, AppError> {
        let short_token = generate_short_token(original);

        if let Some(existing) = self.repository.find_by_token(&short_token).await? {
            return Ok(existing);
        }

        let new_url = NewShortUrl {
            short_token,
            original: original.to_string(),
        };

        self.repository.create(new_url).await
    }

    async fn find_by_token(&self, token: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", format!("token {token}")))
    }

    /// # Click counting
    ///
    /// The increment must succeed for the redirect to succeed: a failure to
    /// count the visit (including an unexpected zero-affected-rows result)
    /// aborts the redirect rather than silently dropping the click. The
    /// returned record carries the pre-increment click count.
    async fn redirect(&self, token: &str) -> Result<ShortUrl, AppError> {
        let record = self
            .repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", format!("token {token}")))?;

        let affected = self.repository.increment_click_count(token).await?;
        if affected == 0 {
            return Err(AppError::update_failed(
                "Unable to update click statistics",
                format!("token {token}"),
            ));
        }

        Ok(record)
    }
}
