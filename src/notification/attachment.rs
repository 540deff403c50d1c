//! Slack attachment rendering.
//!
//! Slack attachments support the formatting described at
//! <https://api.slack.com/docs/formatting>. The field layout here is fixed:
//! eight fields in a set order, with the paired "short" fields laid out
//! two-per-row by the Slack client.

use serde::{Deserialize, Serialize};

use super::message::AlarmMessage;
use crate::config::AppConfig;

/// Color tag marking the attachment as an alert.
const ATTACHMENT_COLOR: &str = "danger";

/// Static body line shown under the pretext.
const ATTACHMENT_TEXT: &str = "Automatic alert\n";

/// A Slack message attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Color bar shown alongside the attachment (`danger` renders red).
    pub color: String,
    /// Attachment title.
    pub title: String,
    /// URL the title links to.
    pub title_link: String,
    /// Text shown above the attachment body.
    pub pretext: String,
    /// Attachment body text.
    pub text: String,
    /// Ordered display fields; order is preserved by Slack.
    pub fields: Vec<AttachmentField>,
}

/// A single titled field inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Field heading.
    pub title: String,
    /// Field value, already formatted for display.
    pub value: String,
    /// Whether the field is narrow enough to share a row.
    #[serde(default)]
    pub short: bool,
}

impl AttachmentField {
    fn full(title: &str, value: &str) -> Self {
        Self { title: title.to_string(), value: emphasize(value), short: false }
    }

    fn short(title: &str, value: &str) -> Self {
        Self { title: title.to_string(), value: emphasize(value), short: true }
    }
}

/// Wraps a raw value in Slack italics markers.
fn emphasize(value: &str) -> String {
    format!("_{value}_")
}

impl AlarmMessage {
    /// Renders the message as a Slack attachment.
    ///
    /// The title link comes from the configured CloudWatch alarm URL. The
    /// eight fields are emitted in a fixed order that downstream rendering
    /// relies on.
    pub fn to_attachment(&self, config: &AppConfig) -> Attachment {
        Attachment {
            color: ATTACHMENT_COLOR.to_string(),
            title: self.title.clone(),
            title_link: config.cloudwatch_alert_link.to_string(),
            pretext: format!(":fire: *WAF Alert - WebACL: {}* :fire:", self.web_acl),
            text: ATTACHMENT_TEXT.to_string(),
            fields: vec![
                AttachmentField::full("Alarm Name", &self.alarm_name),
                AttachmentField::full("Alarm Description", &self.alarm_description),
                AttachmentField::full("Alarm Trigger", &self.trigger),
                AttachmentField::short("Alarm Old State", &self.old_state),
                AttachmentField::short("Alarm New State", &self.new_state),
                AttachmentField::full("Alarm New State Reason", &self.new_state_reason),
                AttachmentField::short("AWS Account ID", &self.aws_account_id),
                AttachmentField::short("AWS Region", &self.aws_region),
            ],
        }
    }
}
