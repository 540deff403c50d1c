//! Configuration module for the notifier.
//!
//! All settings are sourced from the environment at process start. Every
//! setting is required; a missing or empty value is a fatal startup
//! condition and the function must not accept any event without all of
//! them present.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use url::Url;

/// Application configuration, loaded once at startup and read-only
/// thereafter.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Name of the Slack channel where alerts are posted.
    pub slack_channel: String,

    /// Name of the AWS Secrets Manager entry holding the Slack bot token.
    pub aws_secrets_manager_name: String,

    /// URL of the CloudWatch alarm, used as the attachment title link.
    pub cloudwatch_alert_link: Url,

    /// Name of the WAF Web ACL this function is a trigger for.
    pub web_acl: String,
}

impl AppConfig {
    /// Creates a new `AppConfig` from the process environment.
    ///
    /// Reads `SLACK_CHANNEL`, `AWS_SECRETS_MANAGER_NAME`,
    /// `CLOUDWATCH_ALERT_LINK` and `WEB_ACL`. Empty values are treated the
    /// same as unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    fn from_source(source: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder().add_source(source.ignore_empty(true)).build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const REQUIRED: [(&str, &str); 4] = [
        ("SLACK_CHANNEL", "#waf-alerts"),
        ("AWS_SECRETS_MANAGER_NAME", "prod/waf-notifier"),
        ("CLOUDWATCH_ALERT_LINK", "https://console.aws.amazon.com/cloudwatch/home"),
        ("WEB_ACL", "prod-web-acl"),
    ];

    fn env_map(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        AppConfig::from_source(Environment::default().source(Some(env_map(vars))))
    }

    #[test]
    fn loads_all_required_settings() {
        let config = from_vars(&REQUIRED).unwrap();

        assert_eq!(config.slack_channel, "#waf-alerts");
        assert_eq!(config.aws_secrets_manager_name, "prod/waf-notifier");
        assert_eq!(
            config.cloudwatch_alert_link.as_str(),
            "https://console.aws.amazon.com/cloudwatch/home"
        );
        assert_eq!(config.web_acl, "prod-web-acl");
    }

    #[test]
    fn fails_when_any_required_setting_is_missing() {
        for missing in 0..REQUIRED.len() {
            let vars: Vec<(&str, &str)> = REQUIRED
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != missing)
                .map(|(_, kv)| *kv)
                .collect();

            let result = from_vars(&vars);
            assert!(result.is_err(), "expected error with {} unset", REQUIRED[missing].0);
        }
    }

    #[test]
    fn treats_empty_value_as_missing() {
        let mut vars = REQUIRED;
        vars[0].1 = "";

        let result = from_vars(&vars);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_alert_link() {
        let mut vars = REQUIRED;
        vars[2].1 = "not a url";

        let result = from_vars(&vars);
        assert!(result.is_err());
    }
}
