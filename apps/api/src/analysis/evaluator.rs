//! The evaluator seam: resume text in, structured analysis or a typed
//! failure out. The production implementation calls Gemini through
//! [`LlmClient`]; tests inject stubs through the trait object in `AppState`.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::analysis::models::{response_schema, ResumeAnalysis};
use crate::analysis::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM, ANALYZE_TEMPERATURE};
use crate::llm_client::LlmClient;

/// Generic client-facing message for any evaluation failure. The raw cause
/// goes into [`EvaluationFailure::detail`] and stays server-side.
pub const EVALUATION_FAILED_MESSAGE: &str =
    "Failed to analyze resume. Check API key and service status.";

/// Error payload produced when an evaluation cannot complete.
/// `message` is safe to show to users; `detail` carries the raw cause.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationFailure {
    pub message: String,
    pub detail: String,
}

impl std::fmt::Display for EvaluationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.detail)
    }
}

/// Turns resume text into a structured score/feedback record.
///
/// Exactly one of the two variants is produced per call — the evaluator
/// decides explicitly, callers never infer success from payload shape.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, resume_text: &str) -> Result<ResumeAnalysis, EvaluationFailure>;
}

/// Production evaluator backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiEvaluator {
    llm: LlmClient,
}

impl GeminiEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Evaluator for GeminiEvaluator {
    /// Single attempt, no retry. Network, authentication, and malformed or
    /// schema-violating responses are all caught here and converted into an
    /// `EvaluationFailure`; no transport error escapes to the caller.
    async fn evaluate(&self, resume_text: &str) -> Result<ResumeAnalysis, EvaluationFailure> {
        let prompt = ANALYZE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

        self.llm
            .call_json::<ResumeAnalysis>(
                &prompt,
                ANALYZE_SYSTEM,
                &response_schema(),
                ANALYZE_TEMPERATURE,
            )
            .await
            .map_err(|e| {
                warn!("resume evaluation failed: {e}");
                EvaluationFailure {
                    message: EVALUATION_FAILED_MESSAGE.to_string(),
                    detail: e.to_string(),
                }
            })
    }
}
