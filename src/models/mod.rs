//! Data models for inbound alarm notifications.

pub mod alarm;

pub use alarm::{AlarmPayload, AlarmTrigger};
