//! Host extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

use crate::error::AppError;

/// Extracts the raw `Host` header value from a request.
///
/// The value is returned as-is, including any port; callers that compare
/// hostnames strip the port themselves (see
/// [`crate::utils::own_domain::is_own_host`]).
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] if the header is missing or not
/// valid UTF-8.
pub fn extract_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::invalid_argument("Invalid request format", "missing Host header"))?
        .to_str()
        .map_err(|_| AppError::invalid_argument("Invalid request format", "invalid Host header"))?;

    Ok(host.to_string())
}
