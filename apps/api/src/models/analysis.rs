use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// How `SummaryRequest::content` is encoded. Absent means "try base64, then latin-1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEncoding {
    Base64,
    #[serde(alias = "latin-1", alias = "raw")]
    Latin1,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Success,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub encoding: Option<ContentEncoding>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub project_summary: String,
    pub srs_text: String,
    pub status: ResponseStatus,
}

#[derive(Debug, Deserialize)]
pub struct FeatureExtractionRequest {
    #[serde(default)]
    pub srs_content: String,
    #[serde(default)]
    pub project_summary: String,
}

#[derive(Debug, Deserialize)]
pub struct FeatureReEvaluationRequest {
    #[serde(default)]
    pub srs_content: String,
    #[serde(default)]
    pub project_summary: String,
    #[serde(default)]
    pub previous_features: String,
    #[serde(default)]
    pub user_feedback: String,
}

#[derive(Debug, Serialize)]
pub struct FeatureResponse {
    pub feature_details: String,
    pub status: ResponseStatus,
}

#[derive(Debug, Deserialize)]
pub struct RiskAnalysisRequest {
    #[serde(default)]
    pub srs_content: String,
    #[serde(default)]
    pub features: String,
}

#[derive(Debug, Serialize)]
pub struct RiskAnalysisResponse {
    pub risk_analysis: String,
    pub status: ResponseStatus,
}

/// Fails with a 400 naming `field` when `value` is blank.
pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(())
}

impl SummaryRequest {
    /// Returns the document content, rejecting a missing or blank field.
    pub fn content(&self) -> Result<&str, AppError> {
        let content = self.content.as_deref().unwrap_or_default();
        require("content", content)?;
        Ok(content)
    }

    /// Project name, if one was supplied and is not blank.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

impl FeatureExtractionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("srs_content", &self.srs_content)?;
        require("project_summary", &self.project_summary)
    }
}

impl FeatureReEvaluationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("srs_content", &self.srs_content)?;
        require("project_summary", &self.project_summary)?;
        require("previous_features", &self.previous_features)?;
        require("user_feedback", &self.user_feedback)
    }
}

impl RiskAnalysisRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("srs_content", &self.srs_content)?;
        require("features", &self.features)
    }
}
