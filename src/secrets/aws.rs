//! AWS Secrets Manager implementation of [`SecretStore`].

use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;

use super::{SecretStore, SecretsError};

/// A [`SecretStore`] backed by AWS Secrets Manager.
///
/// Requires the `secretsmanager:GetSecretValue` permission (plus
/// `kms:Decrypt` when the secret uses a customer-managed key).
#[derive(Debug, Clone)]
pub struct AwsSecretsManager {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsManager {
    /// Creates a new client from a shared AWS SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self { client: aws_sdk_secretsmanager::Client::new(config) }
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManager {
    async fn secret_string(&self, secret_id: &str) -> Result<String, SecretsError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| SecretsError::Request(DisplayErrorContext(&e).to_string()))?;

        output
            .secret_string()
            .map(str::to_owned)
            .ok_or_else(|| SecretsError::EmptyValue(secret_id.to_string()))
    }
}
