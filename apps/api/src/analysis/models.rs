use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Structured evaluation of one resume, produced by the model under the
/// declared output schema.
///
/// Wire keys are part of the HTTP contract and must not change. The 0–100
/// score range is a model-contract obligation and is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeAnalysis {
    #[serde(rename = "Overall_Score")]
    pub overall_score: i32,
    #[serde(rename = "Strengths")]
    pub strengths: Vec<String>,
    #[serde(rename = "Weaknesses")]
    pub weaknesses: Vec<String>,
    #[serde(rename = "Suggestions")]
    pub suggestions: Vec<String>,
    #[serde(rename = "Summary")]
    pub summary: String,
}

/// The structured-output schema passed to the model. Field names and types
/// mirror [`ResumeAnalysis`] verbatim; the model is constrained to emit
/// conforming JSON, so any drift here breaks parsing.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "Overall_Score": { "type": "INTEGER" },
            "Strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "Weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
            "Suggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "Summary": { "type": "STRING" }
        },
        "required": ["Overall_Score", "Strengths", "Weaknesses", "Suggestions", "Summary"]
    })
}
