//! Handler for short URL statistics lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::envelope::SuccessBody;
use crate::api::dto::shorten::ShortUrlData;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short token, including its click count.
///
/// # Endpoint
///
/// `GET /stats/{token}`
///
/// # Errors
///
/// Returns 404 Not Found if the token does not exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<SuccessBody<ShortUrlData>>, AppError> {
    let record = state.url_service.find_by_token(&token).await?;

    Ok(Json(SuccessBody::new(
        "URL retrieved successfully",
        ShortUrlData::from(record),
    )))
}
