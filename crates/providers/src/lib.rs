//! LLM provider implementations for Supperplan.
//!
//! All providers implement the `supperplan_core::Provider` trait. Only the
//! Anthropic Messages API is supported; `build_from_config` wires it up when
//! a credential is present.

pub mod anthropic;

use std::sync::Arc;
use std::time::Duration;

use supperplan_core::Provider;
use tracing::{info, warn};

pub use anthropic::AnthropicProvider;

/// Build the upstream provider from configuration.
///
/// Returns `None` when no API key is configured; callers surface that as a
/// "service unavailable" condition per request rather than refusing to start.
pub fn build_from_config(config: &supperplan_config::AppConfig) -> Option<Arc<dyn Provider>> {
    let Some(api_key) = config.api_key.as_deref() else {
        warn!("ANTHROPIC_API_KEY is not set; generation endpoints will return 503");
        return None;
    };

    let provider = AnthropicProvider::new(api_key)
        .with_base_url(&config.anthropic.base_url)
        .with_timeout(Duration::from_secs(config.anthropic.timeout_secs));

    info!(
        provider = provider.name(),
        base_url = %config.anthropic.base_url,
        timeout_secs = config.anthropic.timeout_secs,
        "Upstream provider configured"
    );

    Some(Arc::new(provider))
}
