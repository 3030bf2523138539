//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Abstraction over the picked resume file
//! - **API Types** - Analysis service response structures
//! - **Error Types** - Request/response failures

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Anything that carries a file name and a declared media type.
///
/// Implemented for `web_sys::File` in the browser; tests use a plain struct.
pub trait FileLike {
    /// File name as chosen by the user.
    fn file_name(&self) -> String;
    /// Declared MIME type. Empty when the browser could not determine one.
    fn media_type(&self) -> String;
}

impl FileLike for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response of the analysis service.
///
/// Missing fields fall back to empty values so a partial response still
/// renders; anything that is not a JSON object fails to decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// ATS compatibility score, expected in 0..=100
    #[serde(default, deserialize_with = "score")]
    pub ats_score: i64,
    /// Job description terms not found in the resume
    #[serde(default, deserialize_with = "nullable")]
    pub missing_keywords: Vec<String>,
    /// Free-text improvement suggestions, in service order
    #[serde(default, deserialize_with = "nullable")]
    pub improvement_suggestions: Vec<String>,
    /// Qualitative insights
    #[serde(default, deserialize_with = "nullable")]
    pub ai_insights: AiInsights,
}

/// Qualitative part of the analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    #[serde(default, deserialize_with = "nullable")]
    pub tone_analysis: String,
    /// Readability summary
    #[serde(default, deserialize_with = "nullable")]
    pub readability: String,
    /// Readability score, expected in 0..=100
    #[serde(default, deserialize_with = "score")]
    pub readability_score: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub achievement_analysis: String,
    #[serde(default, deserialize_with = "nullable")]
    pub achievement_suggestions: Vec<String>,
}

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integer or fractional scores (rounded) and `null`.
fn score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number
        .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)))
        .unwrap_or_default())
}

/// Error body returned by the service on non-2xx statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceError {
    pub error: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Failure of an analysis request.
///
/// Every variant ends the workflow in `Failed`; see [`AppError::user_message`]
/// for what the user sees.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// The multipart request could not be built.
    #[error("Request error: {0}")]
    Request(String),

    /// The service could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The body did not decode into an [`AnalysisResult`].
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl AppError {
    /// Short, human-readable description for the error notice.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Request(_) => "Could not prepare the upload. Please try again.".to_string(),
            AppError::Network(_) => {
                "Could not reach the analysis service. Check your connection and try again."
                    .to_string()
            }
            AppError::Server { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            AppError::Server { status, .. } => {
                format!("Failed to analyze resume (HTTP {})", status)
            }
            AppError::Decode(_) => {
                "The analysis service returned an unexpected response.".to_string()
            }
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_result_deserialization() {
        let value = json!({
            "ats_score": 72,
            "missing_keywords": ["leadership", "sql"],
            "improvement_suggestions": ["Add metrics", "Use action verbs"],
            "ai_insights": {
                "tone_analysis": "Professional, balanced tone.",
                "readability": "Reasonably readable.",
                "readability_score": 64,
                "achievement_analysis": "Some quantified achievements.",
                "achievement_suggestions": ["Quantify your impact"]
            }
        });

        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.ats_score, 72);
        assert_eq!(result.missing_keywords, vec!["leadership", "sql"]);
        assert_eq!(result.improvement_suggestions.len(), 2);
        assert_eq!(result.ai_insights.readability_score, 64);
        assert_eq!(result.ai_insights.achievement_suggestions, vec!["Quantify your impact"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let result: AnalysisResult = serde_json::from_value(json!({ "ats_score": 40 })).unwrap();
        assert_eq!(result.ats_score, 40);
        assert!(result.missing_keywords.is_empty());
        assert!(result.improvement_suggestions.is_empty());
        assert_eq!(result.ai_insights, AiInsights::default());
    }

    #[test]
    fn test_null_fields_default() {
        let value = json!({
            "ats_score": null,
            "missing_keywords": null,
            "ai_insights": { "readability": null, "readability_score": 55.6 }
        });
        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.ats_score, 0);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.ai_insights.readability, "");
        assert_eq!(result.ai_insights.readability_score, 56);
    }

    #[test]
    fn test_out_of_range_score_is_kept() {
        let result: AnalysisResult = serde_json::from_value(json!({ "ats_score": 140 })).unwrap();
        assert_eq!(result.ats_score, 140);
    }

    #[test]
    fn test_wrong_shape_fails() {
        assert!(serde_json::from_value::<AnalysisResult>(json!(["not", "an", "object"])).is_err());
        assert!(serde_json::from_value::<AnalysisResult>(json!({ "missing_keywords": "sql" })).is_err());
    }

    #[test]
    fn test_user_messages() {
        let err = AppError::Server { status: 400, message: "Could not extract text from the resume".into() };
        assert_eq!(err.user_message(), "Could not extract text from the resume");

        let err = AppError::Server { status: 502, message: String::new() };
        assert_eq!(err.user_message(), "Failed to analyze resume (HTTP 502)");

        assert!(!AppError::Network("offline".into()).user_message().is_empty());
        assert!(!AppError::Decode("eof".into()).user_message().is_empty());
        assert!(AppError::Decode("eof".into()).to_string().contains("eof"));
    }
}
