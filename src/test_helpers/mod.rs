//! A set of helpers for testing

mod alarm;
mod config;
mod sns;

pub use alarm::AlarmPayloadBuilder;
pub use config::test_app_config;
pub use sns::{sns_event, sns_record_json};
