//! `supperplan serve`: Start the HTTP server.

use supperplan_config::AppConfig;
use tracing::warn;

pub async fn run(
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(host) = host_override {
        config.gateway.host = host;
    }
    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("🍽  Supperplan");
    println!("   Listening: http://{}", config.bind_addr());
    println!("   Model: {}", config.model);
    if !config.has_api_key() {
        println!("   ⚠️  ANTHROPIC_API_KEY not set: generation endpoints will answer 503");
        warn!("Starting without an Anthropic API key");
    }

    supperplan_gateway::start(config).await?;

    Ok(())
}
