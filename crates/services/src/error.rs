//! Shared error types for the services crate.

use thiserror::Error;

/// Case-insensitive marker the backend includes in its unavailability prose.
const OFFLINE_MARKER: &str = "offline";

/// Errors emitted by the Ainstien API client.
///
/// The backend signals unavailability inconsistently (an HTTP 503 on some
/// endpoints, an "offline"-flavored message on others); both are normalized
/// to `Offline` here so the session state machines consume a single signal.
/// Transport-level failures are deliberately *not* mapped to `Offline`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("the AI backend is currently offline")]
    Offline,
    #[error("the server returned an empty response")]
    EmptyResponse,
    #[error("no questions were generated; please try again")]
    NoQuestions,
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Build an error from a non-success status code.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            Self::Offline
        } else {
            Self::Status(status)
        }
    }

    /// Build an error from a server-provided message, honoring the offline
    /// marker and the status it arrived with.
    #[must_use]
    pub fn from_server_message(status: reqwest::StatusCode, message: &str) -> Self {
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
            || message.to_lowercase().contains(OFFLINE_MARKER)
        {
            Self::Offline
        } else {
            Self::Server(message.to_string())
        }
    }

    /// True when the failure means the AI backend reported itself unavailable.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline)
    }
}
