use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use waf_alarm_notifier::{
    config::AppConfig, handler::AlarmRelay, notification::SlackClient, secrets::AwsSecretsManager,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // A missing setting aborts here, before the runtime accepts any event.
    let config = AppConfig::from_env()?;
    tracing::debug!(
        channel = %config.slack_channel,
        secret = %config.aws_secrets_manager_name,
        web_acl = %config.web_acl,
        "Configuration loaded."
    );

    let aws_config = aws_config::load_from_env().await;
    let relay = AlarmRelay::new(config, AwsSecretsManager::new(&aws_config), SlackClient::new());
    let relay = &relay;

    run(service_fn(move |event: LambdaEvent<SnsEvent>| async move {
        relay.handle_batch(event.payload).await.map_err(Error::from)
    }))
    .await
}
