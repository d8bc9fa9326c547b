/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig<'a>,
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    temperature: f32,
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// The single LLM client used by all services.
/// Wraps the Gemini `generateContent` API with structured-output helpers.
///
/// Each request is a single attempt: retry policy belongs to callers, and no
/// timeout is set on the model round trip — the request runs to completion or
/// failure.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    ///
    /// `schema` is the declared structured-output shape; the model is
    /// constrained to emit JSON conforming to it.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
        temperature: f32,
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }

    /// Convenience method that calls the LLM and deserializes the text
    /// response as JSON into `T`. The declared schema must match `T`'s shape.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
        temperature: f32,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system, schema, temperature).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
