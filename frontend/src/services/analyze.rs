//! HTTP service sending a resume and job description to the analysis backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{ANALYZE_PATH, JOB_DESCRIPTION_FIELD, RESUME_FIELD};
use crate::types::{AnalysisResult, AppError, AppResult, ServiceError};
use crate::workflow::SubmissionInput;

/// Posts the submission as multipart form data and decodes the result.
///
/// Any non-2xx status, transport failure or undecodable body is an error.
pub async fn analyze_resume(input: SubmissionInput<File>, backend_url: &str) -> AppResult<AnalysisResult> {
    let (resume, job_description) = input.into_parts();

    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(RESUME_FIELD, &resume, &resume.name())
        .map_err(|e| AppError::Request(format!("Failed to append resume: {:?}", e)))?;
    form_data
        .append_with_str(JOB_DESCRIPTION_FIELD, &job_description)
        .map_err(|e| AppError::Request(format!("Failed to append job description: {:?}", e)))?;

    let url = analyze_url(backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    let started = js_sys::Date::now();
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;
    log::info!(
        "⏱️ {} answered {} in {:.0} ms",
        url,
        status,
        js_sys::Date::now() - started
    );

    if !response.ok() {
        return Err(server_error(status, &body));
    }
    decode_result(&body)
}

/// Full URL of the analysis endpoint.
pub fn analyze_url(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), ANALYZE_PATH)
}

/// Decodes a 2xx body.
pub fn decode_result(body: &str) -> AppResult<AnalysisResult> {
    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Builds the error for a non-2xx response, keeping the service's own
/// `{"error": "..."}` message when there is one.
pub fn server_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ServiceError>(body)
        .map(|e| e.error)
        .unwrap_or_default();
    AppError::Server { status, message }
}
