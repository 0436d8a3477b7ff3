//! Shared test helpers for planner tests.

use std::sync::Mutex;

use supperplan_core::error::ProviderError;
use supperplan_core::provider::{CompletionRequest, CompletionResponse, Provider, Usage};

/// A mock provider that returns a sequence of scripted replies.
///
/// Each call to `complete` returns the next reply in the queue and records
/// the request. Panics if more calls are made than replies provided.
pub struct ScriptedProvider {
    replies: Vec<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that returns a single text reply.
    pub fn text(reply: &str) -> Self {
        Self::new(vec![reply.to_string()])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let index = requests.len();
        let text = self.replies.get(index).cloned().unwrap_or_else(|| {
            panic!(
                "ScriptedProvider: no more replies (call #{}, have {})",
                index + 1,
                self.replies.len()
            )
        });
        let model = request.model.clone();
        requests.push(request);

        Ok(CompletionResponse {
            text,
            model,
            usage: Some(Usage {
                input_tokens: 100,
                output_tokens: 50,
            }),
            stop_reason: Some("end_turn".into()),
        })
    }
}

/// A provider whose upstream always answers 500.
pub struct FailingProvider;

#[async_trait::async_trait]
impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "failing_mock"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        Err(ProviderError::ApiError {
            status_code: 500,
            message: "internal server error".into(),
        })
    }
}
