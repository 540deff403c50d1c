use url::Url;

use crate::config::AppConfig;

/// Creates an `AppConfig` with representative values for tests.
pub fn test_app_config() -> AppConfig {
    AppConfig {
        slack_channel: "#waf-alerts".to_string(),
        aws_secrets_manager_name: "test/waf-notifier".to_string(),
        cloudwatch_alert_link: Url::parse("https://console.aws.amazon.com/cloudwatch/home")
            .unwrap(),
        web_acl: "test-web-acl".to_string(),
    }
}
