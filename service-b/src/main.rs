use service_b::IDENTITY;
use shared::config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();

    info!("{} starting on port {}", IDENTITY.name, config.port);

    if let Err(e) = server_http::run(IDENTITY, &config).await {
        error!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}
