use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use skillquest_core::{GenerationRequest, GenerationResult};

use crate::Generator;

/// A mock generator for testing that returns a preconfigured result and
/// records what it was asked.
pub struct MockGenerator {
    response: GenerationResult,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl MockGenerator {
    /// Create a mock that succeeds with the given Markdown.
    pub fn markdown(text: &str) -> Self {
        Self::with_response(GenerationResult::Markdown(text.to_string()))
    }

    /// Create a mock that fails with the given message.
    pub fn failure(message: &str) -> Self {
        Self::with_response(GenerationResult::Failure(message.to_string()))
    }

    pub fn with_response(response: GenerationResult) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// How many times `generate` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Generator for MockGenerator {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.response.clone()
    }
}
