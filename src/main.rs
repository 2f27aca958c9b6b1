use tracing_subscriber::EnvFilter;

use context7_mcp::config::ServerConfig;
use context7_mcp::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    if let Err(e) = server::serve(&config).await {
        eprintln!("context7-mcp: fatal error: {e}");
        std::process::exit(1);
    }
}
