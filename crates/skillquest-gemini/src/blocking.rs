use skillquest_core::{GenerationRequest, GenerationResult};
use tokio::runtime::Runtime;

use crate::{GeminiClient, GenerateError, Generator};

/// Synchronous facade over [`GeminiClient`] for callers without an async
/// context, such as the terminal UI's worker thread.
///
/// Owns its own tokio runtime; every request runs to completion on it via
/// `block_on`.
pub struct BlockingGeminiClient {
    inner: GeminiClient,
    rt: Runtime,
}

impl BlockingGeminiClient {
    pub fn new(api_key: &str, model: &str) -> Result<Self, GenerateError> {
        Ok(Self {
            inner: GeminiClient::new(api_key, model)?,
            rt: Runtime::new().expect("failed to create tokio runtime"),
        })
    }

    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        model: &str,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            inner: GeminiClient::with_base_url(base_url, api_key, model)?,
            rt: Runtime::new().expect("failed to create tokio runtime"),
        })
    }

    pub fn model(&self) -> &str {
        self.inner.model()
    }

    pub fn try_generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        self.rt.block_on(self.inner.try_generate(request))
    }
}

impl Generator for BlockingGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.rt.block_on(self.inner.generate(request))
    }
}
