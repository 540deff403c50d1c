use aws_lambda_events::event::sns::SnsEvent;
use serde_json::{json, Value};

/// Creates the JSON form of a single SNS record wrapping `message`.
pub fn sns_record_json(message: &str) -> Value {
    json!({
        "EventVersion": "1.0",
        "EventSubscriptionArn":
            "arn:aws:sns:eu-west-1:123456789012:waf-alarms:6e13aa18-a50e-4f2b-a191-7bbf73e8b3b7",
        "EventSource": "aws:sns",
        "Sns": {
            "Type": "Notification",
            "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
            "TopicArn": "arn:aws:sns:eu-west-1:123456789012:waf-alarms",
            "Subject": "ALARM: \"waf-blocked-requests\" in EU (Ireland)",
            "Message": message,
            "Timestamp": "2024-05-14T08:27:00.000Z",
            "SignatureVersion": "1",
            "Signature": "EXAMPLEpH+...",
            "SigningCertUrl":
                "https://sns.eu-west-1.amazonaws.com/SimpleNotificationService-0000000000000000000000.pem",
            "UnsubscribeUrl":
                "https://sns.eu-west-1.amazonaws.com/?Action=Unsubscribe",
            "MessageAttributes": {}
        }
    })
}

/// Creates an `SnsEvent` carrying one record per message, in order.
pub fn sns_event(messages: &[&str]) -> SnsEvent {
    let records: Vec<Value> = messages.iter().map(|m| sns_record_json(m)).collect();
    serde_json::from_value(json!({ "Records": records })).expect("valid SNS event fixture")
}
