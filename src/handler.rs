//! The per-invocation event handler.
//!
//! One invocation receives a batch of SNS records. The Slack token is
//! resolved once, before any record is processed; records are then handled
//! strictly in arrival order. The first failure of any kind (secret
//! resolution, payload parsing, delivery) aborts the invocation. Nothing
//! is retried and remaining records are not processed.

use aws_lambda_events::event::sns::SnsEvent;
use thiserror::Error;

use crate::{
    config::AppConfig,
    models::AlarmPayload,
    notification::{AlarmMessage, MessageDelivery, NotificationError},
    secrets::{SecretStore, SecretsError, slack_token_from_blob},
};

/// Errors that can occur while handling an event batch.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Resolving the Slack token failed; no record was processed.
    #[error("Secret resolution failed: {0}")]
    Secrets(#[from] SecretsError),

    /// A record's embedded alarm payload was not valid JSON.
    #[error("Failed to parse alarm payload: {0}")]
    PayloadParse(#[from] serde_json::Error),

    /// Posting a message to Slack failed.
    #[error("Delivery failed: {0}")]
    Delivery(#[from] NotificationError),
}

/// Wires secret resolution, message formatting and delivery together for
/// each inbound batch.
pub struct AlarmRelay<S, D> {
    config: AppConfig,
    secrets: S,
    delivery: D,
}

impl<S: SecretStore, D: MessageDelivery> AlarmRelay<S, D> {
    /// Creates a new relay over the given collaborators.
    pub fn new(config: AppConfig, secrets: S, delivery: D) -> Self {
        Self { config, secrets, delivery }
    }

    /// Handles one batch of SNS records.
    ///
    /// Fail-fast: on error, the records already delivered stay delivered
    /// and the rest of the batch is dropped.
    pub async fn handle_batch(&self, event: SnsEvent) -> Result<(), HandlerError> {
        let blob = self.secrets.secret_string(&self.config.aws_secrets_manager_name).await?;
        let token = slack_token_from_blob(&blob)?;

        for record in &event.records {
            tracing::info!(
                source = %record.event_source,
                timestamp = %record.sns.timestamp,
                message = %record.sns.message,
                "Received alarm notification record"
            );

            let payload: AlarmPayload = serde_json::from_str(&record.sns.message)?;

            let message = AlarmMessage::from_payload(&payload, &self.config);
            let attachment = message.to_attachment(&self.config);

            let posted = self
                .delivery
                .post_message(&token, &self.config.slack_channel, &attachment, true)
                .await?;

            tracing::info!(
                channel = %posted.channel,
                ts = %posted.ts,
                "Message successfully sent to Slack"
            );
        }

        Ok(())
    }
}
