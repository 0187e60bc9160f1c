//! Success response envelope.

use serde::Serialize;

/// Wrapper for every successful response: a human-readable message plus the
/// data payload. The error-side counterpart is
/// [`crate::error::ErrorBody`].
#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> SuccessBody<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
