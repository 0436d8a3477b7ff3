//! The generation pipeline: assemble a prompt, make one upstream call,
//! decode the JSON embedded in the reply.

use std::sync::Arc;

use serde_json::Value;
use supperplan_config::AppConfig;
use supperplan_core::error::{ProviderError, Result};
use supperplan_core::provider::{CompletionRequest, Provider};
use supperplan_core::extract_json;
use tracing::{error, info};

use crate::prompts;
use crate::request::{CookbookRequest, MenuPreferences};

/// Message surfaced when no upstream credential is configured.
pub const MISSING_KEY_MESSAGE: &str = "Missing ANTHROPIC_API_KEY. Set it in your environment \
     (or api_key in ~/.supperplan/config.toml) and restart the server.";

/// Generates menus and cookbooks through an LLM provider.
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct Planner {
    /// `None` when no credential is configured
    provider: Option<Arc<dyn Provider>>,

    /// The model to request
    model: String,

    /// Max tokens per reply
    max_tokens: u32,
}

impl Planner {
    /// Create a planner around an already-built provider.
    pub fn new(provider: Option<Arc<dyn Provider>>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
        }
    }

    /// Build the provider from configuration and wrap it.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            supperplan_providers::build_from_config(config),
            &config.model,
            config.anthropic.max_tokens,
        )
    }

    /// Whether an upstream provider is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Five menu ideas for the given preferences.
    pub async fn generate_menus(&self, prefs: &MenuPreferences) -> Result<Value> {
        let prompt = prompts::menu_prompt(prefs);
        self.run("menus", prompt).await
    }

    /// The full cookbook for a selected menu.
    pub async fn generate_cookbook(&self, req: &CookbookRequest) -> Result<Value> {
        let prompt = prompts::cookbook_prompt(req)?;
        self.run("cookbook", prompt).await
    }

    async fn run(&self, kind: &'static str, prompt: String) -> Result<Value> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| ProviderError::NotConfigured(MISSING_KEY_MESSAGE.into()))?;

        let request_id = uuid::Uuid::new_v4();
        info!(
            %request_id,
            kind,
            provider = provider.name(),
            model = %self.model,
            prompt_len = prompt.len(),
            "Requesting generation"
        );

        let start = std::time::Instant::now();
        let request = CompletionRequest::new(&self.model, prompt, self.max_tokens);
        let response = provider.complete(request).await.inspect_err(|e| {
            error!(%request_id, kind, error = %e, "Upstream call failed");
        })?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            %request_id,
            kind,
            elapsed_ms,
            response_len = response.text.len(),
            output_tokens = response.usage.map(|u| u.output_tokens),
            total_tokens = response.usage.map(|u| u.total()),
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            "Generation complete"
        );

        Ok(extract_json(&response.text)?)
    }
}
