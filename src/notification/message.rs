//! Building the display-ready alarm message.

use crate::{
    config::AppConfig,
    models::{AlarmPayload, AlarmTrigger},
};

/// Banner used as the attachment title for every alarm message.
pub(crate) const MESSAGE_TITLE: &str =
    ":rotating_light: AWS CloudWatch Notification :rotating_light:\n";

/// Formats the alarm trigger as a single human-readable sentence.
///
/// The threshold is always rendered with three decimal places; the period
/// counts are rendered as plain integers. Deterministic for any well-formed
/// trigger.
pub fn format_trigger(trigger: &AlarmTrigger) -> String {
    format!(
        "{} {} {} {:.3} for {} period(s) of {} seconds in Namespace {}",
        trigger.statistic,
        trigger.metric_name,
        trigger.comparison_operator,
        trigger.threshold,
        trigger.evaluation_periods,
        trigger.period,
        trigger.namespace
    )
}

/// The alarm information to be displayed in Slack.
///
/// Constructed fresh for each inbound record, rendered into an
/// [`Attachment`](crate::notification::Attachment) and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmMessage {
    /// Fixed banner title.
    pub title: String,
    /// Name of the alarm that fired.
    pub alarm_name: String,
    /// Description of the alarm.
    pub alarm_description: String,
    /// Human-readable trigger sentence, see [`format_trigger`].
    pub trigger: String,
    /// State the alarm transitioned from.
    pub old_state: String,
    /// State the alarm transitioned to.
    pub new_state: String,
    /// Reason CloudWatch gave for the transition.
    pub new_state_reason: String,
    /// Account the alarm belongs to.
    pub aws_account_id: String,
    /// Region the alarm fired in.
    pub aws_region: String,
    /// Name of the protected Web ACL, taken from the runtime configuration
    /// rather than the payload.
    pub web_acl: String,
}

impl AlarmMessage {
    /// Builds a message from an alarm payload and the runtime
    /// configuration.
    ///
    /// Payload fields map 1:1 onto message fields; the Web ACL name is
    /// stamped from `config` only.
    pub fn from_payload(payload: &AlarmPayload, config: &AppConfig) -> Self {
        Self {
            title: MESSAGE_TITLE.to_string(),
            alarm_name: payload.alarm_name.clone(),
            alarm_description: payload.alarm_description.clone(),
            trigger: format_trigger(&payload.trigger),
            old_state: payload.old_state_value.clone(),
            new_state: payload.new_state_value.clone(),
            new_state_reason: payload.new_state_reason.clone(),
            aws_account_id: payload.aws_account_id.clone(),
            aws_region: payload.region.clone(),
            web_acl: config.web_acl.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{AlarmPayloadBuilder, test_app_config};

    #[test]
    fn formats_trigger_sentence() {
        let trigger = AlarmTrigger {
            statistic: "Average".to_string(),
            metric_name: "BlockedRequests".to_string(),
            comparison_operator: ">=".to_string(),
            threshold: 100.0,
            evaluation_periods: 1,
            period: 60,
            namespace: "WAF".to_string(),
        };

        assert_eq!(
            format_trigger(&trigger),
            "Average BlockedRequests >= 100.000 for 1 period(s) of 60 seconds in Namespace WAF"
        );
    }

    #[test]
    fn threshold_always_has_three_decimals() {
        let mut trigger = AlarmTrigger { threshold: 80.0, ..Default::default() };
        assert!(format_trigger(&trigger).contains("80.000"));

        trigger.threshold = 82.5;
        assert!(format_trigger(&trigger).contains("82.500"));

        trigger.threshold = 0.1234;
        assert!(format_trigger(&trigger).contains("0.123"));
    }

    #[test]
    fn format_trigger_is_deterministic() {
        let trigger = AlarmTrigger { threshold: 99.9, period: 300, ..Default::default() };
        assert_eq!(format_trigger(&trigger), format_trigger(&trigger.clone()));
    }

    #[test]
    fn maps_payload_fields() {
        let payload = AlarmPayloadBuilder::new()
            .alarm_name("my-alarm")
            .old_state("OK")
            .new_state("ALARM")
            .build();
        let config = test_app_config();

        let message = AlarmMessage::from_payload(&payload, &config);

        assert_eq!(message.title, MESSAGE_TITLE);
        assert_eq!(message.alarm_name, "my-alarm");
        assert_eq!(message.old_state, "OK");
        assert_eq!(message.new_state, "ALARM");
        assert_eq!(message.aws_account_id, payload.aws_account_id);
        assert_eq!(message.aws_region, payload.region);
    }

    #[test]
    fn web_acl_comes_from_config_not_payload() {
        let config = test_app_config();

        let first = AlarmPayloadBuilder::new().alarm_name("a").build();
        let second = AlarmPayloadBuilder::new()
            .alarm_name("completely-different")
            .new_state("INSUFFICIENT_DATA")
            .build();

        let first_message = AlarmMessage::from_payload(&first, &config);
        let second_message = AlarmMessage::from_payload(&second, &config);

        assert_eq!(first_message.web_acl, config.web_acl);
        assert_eq!(second_message.web_acl, config.web_acl);
    }
}
