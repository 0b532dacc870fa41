//! Typed failures reported by the YouTube API.

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// A non-success response from the YouTube Data API.
///
/// Carried inside the [`eyre::Report`] returned by every client call, so callers that care
/// about the cause can recover it with `report.downcast_ref::<ApiError>()`.
#[derive(Debug, Clone, Error)]
#[error("YouTube API request failed with status {status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    /// Machine-readable reason from `error.errors[0].reason`, e.g. `commentsDisabled`.
    pub reason: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, reason: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Builds an error from a raw response body.
    ///
    /// Google APIs return `{"error": {"message": .., "errors": [{"reason": ..}]}}`; if the body
    /// has some other shape the whole body becomes the message.
    pub fn from_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => Self {
                status,
                reason: error.errors.into_iter().find_map(|detail| detail.reason),
                message: error.message,
            },
            Err(_) => Self {
                status,
                reason: None,
                message: body.trim().to_string(),
            },
        }
    }

    pub fn is_comments_disabled(&self) -> bool {
        self.reason.as_deref() == Some("commentsDisabled")
            || self.message.contains("disabled comments")
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
            || self
                .reason
                .as_deref()
                .is_some_and(|reason| reason.ends_with("NotFound"))
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(
            self.reason.as_deref(),
            Some("quotaExceeded" | "rateLimitExceeded" | "dailyLimitExceeded")
        )
    }
}
