//! Error types for secret resolution.

use thiserror::Error;

/// Defines the possible errors that can occur while resolving the Slack
/// token.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The request to the secrets store failed.
    #[error("Secrets Manager request failed: {0}")]
    Request(String),

    /// The secret exists but carries no string value.
    #[error("Secret '{0}' has no string value")]
    EmptyValue(String),

    /// The secret value is not valid JSON.
    #[error("Failed to parse secret value as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The secret JSON has no usable token under the expected key.
    #[error("Key '{0}' not found in secret value")]
    MissingToken(&'static str),
}
