//! Self-referential URL detection for the create path.

use url::Url;

use crate::error::AppError;

/// Returns whether `candidate_url` points back at the service's own host.
///
/// Hostnames are compared case-insensitively and ports are ignored on both
/// sides. When `localhost_exempt` is set, a candidate hostname of exactly
/// `localhost` is never treated as the service's own host, so localhost URLs
/// may be shortened even when the service itself runs on localhost.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `candidate_url` is empty, fails to
/// parse as a URL, or has no hostname component.
pub fn is_own_host(
    service_host: &str,
    candidate_url: &str,
    localhost_exempt: bool,
) -> Result<bool, AppError> {
    if candidate_url.is_empty() {
        return Err(AppError::validation(
            "URL validation failed",
            "URL cannot be empty",
        ));
    }

    let parsed = Url::parse(candidate_url)
        .map_err(|_| AppError::validation("URL validation failed", "failed to parse URL"))?;

    let candidate_host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_ascii_lowercase(),
        _ => {
            return Err(AppError::validation(
                "URL validation failed",
                "URL must have a hostname",
            ));
        }
    };

    if localhost_exempt && candidate_host == "localhost" {
        return Ok(false);
    }

    Ok(strip_port(service_host).to_ascii_lowercase() == candidate_host)
}

/// Strips a trailing `:port` from a host string, preserving bracketed IPv6
/// hosts such as `[::1]:8080`.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}
