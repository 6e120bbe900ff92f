use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use skillquest_core::{GenerationRequest, GenerationResult};
use tracing::{debug, trace};

use crate::GenerateError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Async client for the Gemini `generateContent` REST endpoint.
///
/// The credential is validated at construction, so a missing or empty key
/// fails where it can be handled instead of at the first request.
pub struct GeminiClient {
    base_url: String,
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Result<Self, GenerateError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Point the client at a different endpoint (tests use a local server).
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        model: &str,
    ) -> Result<Self, GenerateError> {
        if api_key.trim().is_empty() {
            return Err(GenerateError::Config("API key is not set".into()));
        }
        if model.trim().is_empty() {
            return Err(GenerateError::Config("model name is empty".into()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One outbound request, no retries. Returns the produced text verbatim.
    pub async fn try_generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, GenerateError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest::new(request);

        debug!(url = %url, model = %self.model, "gemini generateContent");
        if let Ok(js) = serde_json::to_string_pretty(&body) {
            trace!(request = %js, "gemini request body");
        }

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GenerateError::Transport(format!("read body: {e}")))?;
        trace!(status = %status, response = %body, "gemini response body");

        if !status.is_success() {
            return Err(parse_error(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GenerateError::Decode(format!("json decode: {e}")))?;
        parsed
            .text()
            .ok_or_else(|| GenerateError::Decode("no candidates in response".into()))
    }

    /// The always-resolving surface: failures come back as
    /// `GenerationResult::Failure` carrying the underlying error's message.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        match self.try_generate(request).await {
            Ok(text) => GenerationResult::Markdown(text),
            Err(e) => GenerationResult::Failure(format!(
                "Une erreur est survenue lors de la génération du cours : {e}"
            )),
        }
    }
}

/// Extract the endpoint's own error message when the body carries one,
/// fall back to the HTTP status otherwise.
fn parse_error(status: StatusCode, body: &str) -> GenerateError {
    let msg = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| format!("HTTP {status}"));
    GenerateError::Endpoint(msg)
}

// -- Wire format --

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(request: &'a GenerationRequest) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.user_instruction,
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let mut out = String::new();
        for part in candidate.content.parts {
            out.push_str(&part.text);
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}
