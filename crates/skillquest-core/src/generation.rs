use serde::{Deserialize, Serialize};

/// The instruction pair sent to the generation endpoint: a fixed system
/// instruction carrying the formatting contract, and a per-request user
/// instruction carrying the course parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_instruction: String,
}

/// Outcome of a generation call.
///
/// A tagged result instead of failure encoded as success text: callers
/// can tell the produced Markdown apart from an error message, and the
/// generating surface still never propagates an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationResult {
    /// The Markdown text produced by the endpoint, verbatim.
    Markdown(String),
    /// Human-readable description of what went wrong.
    Failure(String),
}

impl GenerationResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationResult::Failure(_))
    }

    /// The payload string, whichever variant.
    pub fn text(&self) -> &str {
        match self {
            GenerationResult::Markdown(text) | GenerationResult::Failure(text) => text,
        }
    }
}
