use std::fmt;

use async_trait::async_trait;

use crate::core::profile::ProfileRecord;

/// Errors that can occur while looking up a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Client misconfigured (bad base URL, unbuildable HTTP client).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service answered with a non-2xx status (404 for unknown users).
    Api { status: u16, message: String },
    /// The response body was not a profile.
    Parse(String),
    /// The username cannot name a single user (`.` or `..`).
    InvalidUsername(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Config(msg) => write!(f, "config error: {msg}"),
            LookupError::Network(msg) => write!(f, "network error: {msg}"),
            LookupError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            LookupError::Parse(msg) => write!(f, "parse error: {msg}"),
            LookupError::InvalidUsername(name) => write!(f, "invalid username '{name}'"),
        }
    }
}

impl std::error::Error for LookupError {}

#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Returns the name of the lookup backend.
    fn name(&self) -> &str;

    /// Fetches the public profile for `username`.
    async fn fetch_profile(&self, username: &str) -> Result<ProfileRecord, LookupError>;
}
