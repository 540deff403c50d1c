use crate::models::{AlarmPayload, AlarmTrigger};

/// A builder for creating `AlarmPayload` instances for testing.
pub struct AlarmPayloadBuilder {
    payload: AlarmPayload,
}

impl AlarmPayloadBuilder {
    /// Creates a new builder with values typical of a WAF alarm.
    pub fn new() -> Self {
        Self {
            payload: AlarmPayload {
                alarm_name: "waf-blocked-requests".to_string(),
                alarm_description: "Blocked requests exceeded the threshold".to_string(),
                old_state_value: "OK".to_string(),
                new_state_value: "ALARM".to_string(),
                new_state_reason:
                    "Threshold Crossed: 1 datapoint [120.0] was greater than or equal to the threshold (100.0)."
                        .to_string(),
                aws_account_id: "123456789012".to_string(),
                region: "EU (Ireland)".to_string(),
                trigger: AlarmTrigger {
                    statistic: "Average".to_string(),
                    metric_name: "BlockedRequests".to_string(),
                    comparison_operator: ">=".to_string(),
                    threshold: 100.0,
                    evaluation_periods: 1,
                    period: 60,
                    namespace: "WAF".to_string(),
                },
            },
        }
    }

    /// Sets the alarm name.
    pub fn alarm_name(mut self, name: &str) -> Self {
        self.payload.alarm_name = name.to_string();
        self
    }

    /// Sets the previous alarm state.
    pub fn old_state(mut self, state: &str) -> Self {
        self.payload.old_state_value = state.to_string();
        self
    }

    /// Sets the new alarm state.
    pub fn new_state(mut self, state: &str) -> Self {
        self.payload.new_state_value = state.to_string();
        self
    }

    /// Sets the trigger threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.payload.trigger.threshold = threshold;
        self
    }

    /// Builds the `AlarmPayload` with the provided values.
    pub fn build(self) -> AlarmPayload {
        self.payload
    }

    /// Builds the payload and serializes it the way SNS embeds it.
    pub fn build_json(self) -> String {
        serde_json::to_string(&self.payload).unwrap()
    }
}

impl Default for AlarmPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
