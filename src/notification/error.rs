//! Error types for the notification service.

use thiserror::Error;

/// Defines the possible errors that can occur while delivering a
/// notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// An error indicating that the notification failed to be sent.
    #[error("Notification failed: {0}")]
    NotifyFailed(String),

    /// The chat API accepted the request but reported an error.
    #[error("Slack API error: {0}")]
    ApiError(String),

    /// An error from the underlying `reqwest` library.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
