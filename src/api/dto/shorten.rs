//! DTOs for the shorten endpoint and the serialized record payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid HTTP/HTTPS URL).
    #[serde(default)]
    #[validate(url(message = "please provide a valid URL"))]
    pub url: String,
}

/// Serialized short URL record returned by the create and stats endpoints.
///
/// The soft-delete marker is internal and never serialized.
#[derive(Debug, Serialize)]
pub struct ShortUrlData {
    pub id: i64,
    pub short_token: String,
    pub original: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortUrl> for ShortUrlData {
    fn from(record: ShortUrl) -> Self {
        Self {
            id: record.id,
            short_token: record.short_token,
            original: record.original,
            click_count: record.click_count,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
