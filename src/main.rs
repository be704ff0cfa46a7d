use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hostbeat::agent::Agent;
use hostbeat::collectors::{temperature, SystemProbes};
use hostbeat::config::AgentConfig;
use hostbeat::transport::HttpReporter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AgentConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let reporter = match HttpReporter::new(&config) {
        Ok(reporter) => reporter,
        Err(err) => {
            error!(error = %err, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let temperature_source = temperature::platform_source();
    info!(
        endpoint = reporter.endpoint(),
        interval_secs = config.poll_interval.as_secs(),
        temperature_source = temperature_source.name(),
        "starting hostbeat"
    );
    let probes = SystemProbes::new(temperature_source);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    Agent::new(probes, reporter, config.poll_interval)
        .run(shutdown_rx)
        .await;
}
