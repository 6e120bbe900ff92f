use skillquest_core::{GenerationRequest, GenerationResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("generation endpoint error: {0}")]
    Endpoint(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Abstraction over one-shot text generation.
///
/// The TUI programs against this trait.
/// `BlockingGeminiClient` talks to the real endpoint.
/// `MockGenerator` returns canned results for tests.
///
/// `generate` always resolves: every failure is folded into
/// `GenerationResult::Failure` so callers have no rejection path to handle.
pub trait Generator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult;
}
