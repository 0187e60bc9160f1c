//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Behavior
///
/// Resolves the token and atomically counts the visit before responding.
/// A failed click-count update aborts the redirect; the visit is never
/// silently dropped.
///
/// # Response
///
/// `302 Found` with `Location` set to the record's original URL.
///
/// # Errors
///
/// Returns 404 Not Found if the token does not exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.url_service.redirect(&token).await?;

    debug!("redirecting {} -> {}", token, record.original);

    let location = HeaderValue::from_str(&record.original).map_err(|_| {
        AppError::internal(
            "Unable to redirect",
            "stored URL is not a valid Location header value",
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::MockUrlService;
    use crate::domain::entities::ShortUrl;
    use axum::extract::{Path, State};
    use chrono::Utc;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;

    fn test_state(service: MockUrlService) -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        AppState {
            db: pool,
            url_service: Arc::new(service),
            localhost_exempt: true,
        }
    }

    fn sample_record(original: &str) -> ShortUrl {
        let now = Utc::now();
        ShortUrl {
            id: 1,
            short_token: "a9993e364706816a".to_string(),
            original: original.to_string(),
            click_count: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_redirect_sets_found_status_and_location() {
        let mut service = MockUrlService::new();
        service
            .expect_redirect()
            .withf(|t| t == "a9993e364706816a")
            .times(1)
            .returning(|_| Ok(sample_record("https://example.com/target")));

        let response = redirect_handler(
            State(test_state(service)),
            Path("a9993e364706816a".to_string()),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/target"
        );
    }

    #[tokio::test]
    async fn test_redirect_propagates_not_found() {
        let mut service = MockUrlService::new();
        service
            .expect_redirect()
            .times(1)
            .returning(|_| Err(AppError::not_found("Short URL not found", "token absent")));

        let result = redirect_handler(State(test_state(service)), Path("missing".to_string())).await;

        // The success type is opaque, so take the error side directly.
        let err = result.err().unwrap();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
