//! # Notification Service
//!
//! This module turns a parsed alarm payload into a Slack message and
//! delivers it.
//!
//! ## Core Components
//!
//! - **`AlarmMessage`**: the display-ready message built from an
//!   [`AlarmPayload`](crate::models::AlarmPayload) and the runtime
//!   configuration.
//! - **`Attachment`**: the Slack attachment wire format the message is
//!   rendered into, with a fixed field layout.
//! - **`MessageDelivery` Trait**: the single-method capability interface
//!   for posting a rendered attachment, allowing the handler to be tested
//!   with doubles.
//! - **`SlackClient`**: the `reqwest`-based implementation targeting the
//!   Slack Web API's `chat.postMessage` method.

mod attachment;
mod error;
mod message;
mod slack;

pub use attachment::{Attachment, AttachmentField};
pub use error::NotificationError;
pub use message::{AlarmMessage, format_trigger};
pub use slack::SlackClient;

use async_trait::async_trait;

/// Confirmation returned by the chat system for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Identifier of the channel the message was posted to.
    pub channel: String,
    /// Timestamp assigned to the message by the chat system.
    pub ts: String,
}

/// A client that can deliver a rendered attachment to a chat channel.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Posts `attachment` to `channel`, authenticating with `token`.
    ///
    /// When `as_user` is set the message is posted as the authenticated
    /// user instead of the default bot identity.
    async fn post_message(
        &self,
        token: &str,
        channel: &str,
        attachment: &Attachment,
        as_user: bool,
    ) -> Result<PostedMessage, NotificationError>;
}
