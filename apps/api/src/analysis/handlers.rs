//! Axum handler for the Analysis API.
//!
//! Request flow: validate the upload, spill it to a scoped temporary file,
//! extract text, evaluate, respond. Every failure exit short-circuits into an
//! `AppError`; the temp file is removed on all paths via RAII.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::analysis::models::ResumeAnalysis;
use crate::errors::AppError;
use crate::extract::extract_text_from_pdf;
use crate::state::AppState;

const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type. Only PDF files are accepted.";

/// POST /analyze-resume
///
/// Accepts exactly one multipart `file` field carrying a PDF and returns the
/// structured analysis as JSON.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut file_field = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let content_type = field.content_type().map(str::to_string);

            // Declared media type only — file contents are not sniffed.
            if content_type.as_deref() != Some("application/pdf") {
                return Err(AppError::Validation(INVALID_FILE_TYPE_MESSAGE.to_string()));
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

            file_field = Some((filename, data));
            break;
        }
    }
    let (filename, data) = file_field
        .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    info!(filename = %filename, size = data.len(), "resume upload received");

    // Scoped temp file: unique generated name, deleted on drop no matter
    // which exit path below is taken.
    let temp = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile_in(&state.config.upload_dir)
        .context("failed to create temporary upload file")?;
    tokio::fs::write(temp.path(), &data)
        .await
        .context("failed to write uploaded bytes")?;

    // pdf-extract is synchronous CPU work; keep it off the async runtime.
    let path = temp.path().to_path_buf();
    let resume_text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&path))
        .await
        .context("extraction task panicked")??;

    let analysis = state
        .evaluator
        .evaluate(&resume_text)
        .await
        .map_err(AppError::Evaluation)?;

    info!(score = analysis.overall_score, "resume analysis complete");

    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::evaluator::{
        EvaluationFailure, Evaluator, EVALUATION_FAILED_MESSAGE,
    };
    use crate::config::Config;
    use crate::routes::build_router;

    struct FixedEvaluator(ResumeAnalysis);

    #[async_trait]
    impl Evaluator for FixedEvaluator {
        async fn evaluate(&self, _resume_text: &str) -> Result<ResumeAnalysis, EvaluationFailure> {
            Ok(self.0.clone())
        }
    }

    struct FailingEvaluator;

    #[async_trait]
    impl Evaluator for FailingEvaluator {
        async fn evaluate(&self, _resume_text: &str) -> Result<ResumeAnalysis, EvaluationFailure> {
            Err(EvaluationFailure {
                message: EVALUATION_FAILED_MESSAGE.to_string(),
                detail: "HTTP error: connection refused".to_string(),
            })
        }
    }

    /// Router over a throwaway upload dir so tests can assert cleanup.
    fn test_router(evaluator: Arc<dyn Evaluator>) -> (axum::Router, TempDir) {
        let upload_dir = TempDir::new().unwrap();
        let state = AppState {
            evaluator,
            config: Config {
                gemini_api_key: "test-key".to_string(),
                port: 0,
                upload_dir: upload_dir.path().to_path_buf(),
                rust_log: "info".to_string(),
            },
        };
        (build_router(state), upload_dir)
    }

    fn fixture_pdf() -> Vec<u8> {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/resume.pdf");
        std::fs::read(path).unwrap()
    }

    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    fn multipart_request(
        field_name: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/analyze-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn dir_is_empty(dir: &TempDir) -> bool {
        std::fs::read_dir(dir.path()).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_valid_pdf_returns_analysis_verbatim() {
        let analysis: ResumeAnalysis = serde_json::from_value(json!({
            "Overall_Score": 85,
            "Strengths": ["ML experience"],
            "Weaknesses": [],
            "Suggestions": ["Add metrics"],
            "Summary": "Strong ML candidate"
        }))
        .unwrap();
        let (router, upload_dir) = test_router(Arc::new(FixedEvaluator(analysis)));

        let response = router
            .oneshot(multipart_request(
                "file",
                "resume.pdf",
                "application/pdf",
                &fixture_pdf(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({
                "Overall_Score": 85,
                "Strengths": ["ML experience"],
                "Weaknesses": [],
                "Suggestions": ["Add metrics"],
                "Summary": "Strong ML candidate"
            })
        );
        assert!(dir_is_empty(&upload_dir));
    }

    #[tokio::test]
    async fn test_non_pdf_content_type_is_rejected_without_touching_disk() {
        let (router, upload_dir) = test_router(Arc::new(FailingEvaluator));

        let response = router
            .oneshot(multipart_request(
                "file",
                "resume.docx",
                "text/plain",
                b"plain text resume",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], INVALID_FILE_TYPE_MESSAGE);
        assert!(dir_is_empty(&upload_dir));
    }

    #[tokio::test]
    async fn test_evaluator_failure_returns_500_and_removes_temp_file() {
        let (router, upload_dir) = test_router(Arc::new(FailingEvaluator));

        let response = router
            .oneshot(multipart_request(
                "file",
                "resume.pdf",
                "application/pdf",
                &fixture_pdf(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], EVALUATION_FAILED_MESSAGE);
        // Raw detail is logged, not returned.
        assert!(!body.to_string().contains("connection refused"));
        assert!(dir_is_empty(&upload_dir));
    }

    #[tokio::test]
    async fn test_unparseable_pdf_returns_fixed_extraction_message() {
        let (router, upload_dir) = test_router(Arc::new(FailingEvaluator));

        let response = router
            .oneshot(multipart_request(
                "file",
                "resume.pdf",
                "application/pdf",
                b"this is not a pdf",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Could not extract readable text from the PDF.");
        assert!(dir_is_empty(&upload_dir));
    }

    #[tokio::test]
    async fn test_missing_file_field_is_rejected() {
        let (router, _upload_dir) = test_router(Arc::new(FailingEvaluator));

        let response = router
            .oneshot(multipart_request(
                "document",
                "resume.pdf",
                "application/pdf",
                &fixture_pdf(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Missing 'file' field in upload");
    }
}
