//! Utility functions for token derivation and URL/host handling.
//!
//! - [`token_generator`] - Deterministic short token derivation
//! - [`own_domain`] - Self-referential URL detection
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod extract_host;
pub mod own_domain;
pub mod token_generator;
