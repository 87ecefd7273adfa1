//! Axum route handlers for the analysis API.
//!
//! Each handler validates its fields, builds one prompt, and makes one LLM call.
//! Nothing reaches a collaborator before validation passes.

use axum::{extract::State, Json};
use tracing::{debug, info, Instrument};
use uuid::Uuid;

use crate::analysis::invoker::invoke;
use crate::analysis::prompts::{
    feature_extraction_prompt, feature_re_evaluation_prompt, risk_analysis_prompt,
    summary_prompt,
};
use crate::errors::{ApiJson, AppError};
use crate::ingest::{decode_content, ingest_document};
use crate::models::analysis::{
    FeatureExtractionRequest, FeatureReEvaluationRequest, FeatureResponse, ResponseStatus,
    RiskAnalysisRequest, RiskAnalysisResponse, SummaryRequest, SummaryResponse,
};
use crate::state::AppState;

/// POST /summary/generate
///
/// Parses the uploaded SRS and asks the LLM for a narrative summary.
/// Returns the parsed text alongside the summary so later calls can reuse it.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_summary", %request_id);

    async move {
        debug!("Processing new summary generation request");
        let bytes = decode_content(request.content()?, request.encoding)?;

        let srs_text =
            ingest_document(state.parser.as_ref(), &state.temp_dir, request_id, &bytes).await?;

        let prompt = summary_prompt(&srs_text, request.project_name());
        let project_summary =
            invoke(state.llm.as_ref(), &prompt, "Failed to generate summary").await?;

        info!(srs_len = srs_text.len(), "Summary generated");
        Ok::<_, AppError>(Json(SummaryResponse {
            project_summary,
            srs_text,
            status: ResponseStatus::Success,
        }))
    }
    .instrument(span)
    .await
}

/// POST /features/extract
pub async fn handle_extract_features(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FeatureExtractionRequest>,
) -> Result<Json<FeatureResponse>, AppError> {
    request.validate()?;
    debug!("Processing new feature extraction request");

    let prompt = feature_extraction_prompt(&request.srs_content, &request.project_summary);
    let feature_details =
        invoke(state.llm.as_ref(), &prompt, "Failed to extract features").await?;

    Ok(Json(FeatureResponse {
        feature_details,
        status: ResponseStatus::Success,
    }))
}

/// POST /features/re-evaluate
///
/// `project_summary` is required for parity with extraction but the
/// re-evaluation prompt works from the SRS, the previous report and feedback.
pub async fn handle_re_evaluate_features(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FeatureReEvaluationRequest>,
) -> Result<Json<FeatureResponse>, AppError> {
    request.validate()?;
    debug!("Processing feature re-evaluation request");

    let prompt = feature_re_evaluation_prompt(
        &request.srs_content,
        &request.previous_features,
        &request.user_feedback,
    );
    let feature_details =
        invoke(state.llm.as_ref(), &prompt, "Failed to re-evaluate features").await?;

    Ok(Json(FeatureResponse {
        feature_details,
        status: ResponseStatus::Success,
    }))
}

/// POST /risks/analyze
pub async fn handle_analyze_risks(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RiskAnalysisRequest>,
) -> Result<Json<RiskAnalysisResponse>, AppError> {
    request.validate()?;
    debug!(
        "Processing risk analysis request, features: {}...",
        request.features.chars().take(100).collect::<String>()
    );

    let prompt = risk_analysis_prompt(&request.srs_content, &request.features);
    let risk_analysis = invoke(state.llm.as_ref(), &prompt, "Failed to analyze risks").await?;

    Ok(Json(RiskAnalysisResponse {
        risk_analysis,
        status: ResponseStatus::Success,
    }))
}
