use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webapp::config::Config;
use webapp::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Bind failure is fatal: log it and exit nonzero
    if let Err(e) = server::run(&config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
