//! String Analyzer - HTTP REST API for string property analysis
//!
//! This binary starts the analyzer server with configuration drawn from
//! an optional `analyzer.*` config file and `ANALYZER__`-prefixed
//! environment variables.

use string_analyzer::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::load()?;

    // Start server
    string_analyzer::start_server(config).await?;

    Ok(())
}
