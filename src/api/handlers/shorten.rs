//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::envelope::SuccessBody;
use crate::api::dto::shorten::{ShortUrlData, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;
use crate::utils::own_domain::is_own_host;

/// Creates a short URL for a submitted long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Validation
///
/// - A missing or empty `url` field is a malformed request (400).
/// - A syntactically invalid URL is a validation failure (422).
/// - A URL whose hostname equals the service's own host (taken from the
///   request's `Host` header) is rejected (422) to prevent self-referential
///   redirect loops; `localhost` bypasses the check when the exemption
///   policy is enabled.
///
/// # Response
///
/// `201 Created` with the persisted record. Creating the same URL twice
/// returns the existing record rather than a second row.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<SuccessBody<ShortUrlData>>), AppError> {
    if payload.url.is_empty() {
        return Err(AppError::invalid_argument(
            "Invalid request format",
            "URL field is required",
        ));
    }

    payload.validate()?;

    let own_host = extract_host(&headers)?;
    if is_own_host(&own_host, &payload.url, state.localhost_exempt)? {
        return Err(AppError::validation(
            "URL validation failed",
            "cannot create short URLs for this domain",
        ));
    }

    let record = state.url_service.create_short_token(&payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(
            "Short URL created successfully",
            ShortUrlData::from(record),
        )),
    ))
}
