#![warn(missing_docs)]
//! Relays AWS CloudWatch alarm state changes for a WAF Web ACL to Slack.
//!
//! The crate is deployed as an AWS Lambda function subscribed to an SNS
//! topic. Each SNS record carries a JSON-encoded CloudWatch alarm payload;
//! the handler resolves the Slack bot token from AWS Secrets Manager,
//! formats the alarm as a Slack attachment and posts it to the configured
//! channel.

pub mod config;
pub mod handler;
pub mod models;
pub mod notification;
pub mod secrets;
pub mod test_helpers;
