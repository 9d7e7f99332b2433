use anyhow::{Context, Result};
use shared_resources::config::DispatcherConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // READ CONFIGURATION
    let config = DispatcherConfig::get().context("reading configuration")?;

    let status = dispatcher::modules::run(config)?;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
