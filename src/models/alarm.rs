//! CloudWatch alarm state-change payload, as embedded in an SNS message.
//!
//! The SNS record body is a JSON string representing the alarm state
//! transition. Text fields that are absent from the JSON deserialize to the
//! empty string, so downstream formatting never has to distinguish a
//! missing field from an empty one.

use serde::{Deserialize, Serialize};

/// A CloudWatch alarm state change, one instance per alarm transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct AlarmPayload {
    /// Name of the alarm that changed state.
    pub alarm_name: String,
    /// Human-readable description of the alarm.
    pub alarm_description: String,
    /// The state the alarm transitioned from (e.g. `OK`, `ALARM`,
    /// `INSUFFICIENT_DATA`).
    pub old_state_value: String,
    /// The state the alarm transitioned to.
    pub new_state_value: String,
    /// CloudWatch's explanation for the state change.
    pub new_state_reason: String,
    /// The AWS account the alarm belongs to.
    #[serde(rename = "AWSAccountId")]
    pub aws_account_id: String,
    /// The region the alarm fired in, as reported by CloudWatch.
    pub region: String,
    /// The metric condition that triggered the alarm.
    pub trigger: AlarmTrigger,
}

/// The metric condition attached to a CloudWatch alarm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct AlarmTrigger {
    /// The statistic applied to the metric (e.g. `Average`).
    pub statistic: String,
    /// Name of the metric being watched.
    pub metric_name: String,
    /// Comparison operator between the statistic and the threshold
    /// (e.g. `GreaterThanOrEqualToThreshold`).
    pub comparison_operator: String,
    /// The threshold value the statistic is compared against.
    pub threshold: f64,
    /// Number of periods over which the condition must hold.
    pub evaluation_periods: i64,
    /// Length of one evaluation period, in seconds.
    pub period: i64,
    /// Namespace of the metric (e.g. `AWS/WAFV2`).
    pub namespace: String,
}
