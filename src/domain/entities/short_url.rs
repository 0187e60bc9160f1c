//! Short URL entity representing a token-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a deterministic short token and its original URL.
///
/// `short_token` and `original` are immutable after creation; only
/// `click_count` changes, and only through the redirect path.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub short_token: String,
    pub original: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ShortUrl {
    /// Returns true if the record has been soft-deleted.
    ///
    /// Soft-deleted rows are excluded from every lookup; nothing in the
    /// service currently sets the marker.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub short_token: String,
    pub original: String,
}
