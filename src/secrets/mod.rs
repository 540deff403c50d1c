//! Secret resolution for the Slack bot token.
//!
//! The token is stored in AWS Secrets Manager as a JSON blob with a
//! `slackToken` key. This module defines the interface for fetching the raw
//! secret value and the extraction of the token from it.

mod aws;
mod error;

pub use aws::AwsSecretsManager;
pub use error::SecretsError;

use async_trait::async_trait;

/// JSON key under which the Slack token is stored in the secret value.
const SLACK_TOKEN_KEY: &str = "slackToken";

/// A store that can fetch a secret's string value by its identifier.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetches the raw string value of the secret identified by
    /// `secret_id`.
    async fn secret_string(&self, secret_id: &str) -> Result<String, SecretsError>;
}

/// Extracts the Slack token from a secret blob.
///
/// The blob must be a JSON object with a non-empty string under the
/// `slackToken` key.
pub fn slack_token_from_blob(blob: &str) -> Result<String, SecretsError> {
    let value: serde_json::Value = serde_json::from_str(blob)?;
    match value.get(SLACK_TOKEN_KEY).and_then(serde_json::Value::as_str) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(SecretsError::MissingToken(SLACK_TOKEN_KEY)),
    }
}
