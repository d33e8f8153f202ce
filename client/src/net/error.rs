//! Fetch failure classification.
//!
//! Transport failures and non-2xx statuses collapse into one user-facing
//! message. Payloads that arrive but do not match the wire schema get their
//! own message so they are not mistaken for a backend outage.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when the backend is unreachable or answers with a non-2xx status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please make sure the backend is running.";

/// Shown when the backend answers 2xx with a body that is not a valid dataset.
pub const MALFORMED_DATA_MESSAGE: &str = "The backend returned data in an unexpected format.";

/// Errors produced while loading the topic-modeling dataset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The backend responded with a non-success HTTP status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body could not be decoded as a dataset.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text rendered in place of the dashboard content.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Status(_) => FETCH_FAILED_MESSAGE,
            Self::Decode(_) => MALFORMED_DATA_MESSAGE,
        }
    }
}
