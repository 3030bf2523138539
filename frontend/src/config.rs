//! Application configuration.
//!
//! Centralized configuration for the Resume Analyzer frontend.
//! Values are compiled in; the backend address can be overridden at build
//! time with the `ATS_BACKEND_URL` environment variable.

/// Analysis service base URL.
pub const BACKEND_URL: &str = match option_env!("ATS_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Path of the analysis endpoint, relative to [`BACKEND_URL`].
pub const ANALYZE_PATH: &str = "/analyze";

/// Multipart field carrying the resume blob.
pub const RESUME_FIELD: &str = "resume";

/// Multipart field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// `accept` attribute of the resume picker.
pub const RESUME_ACCEPT: &str = ".pdf,.docx";

/// Application name, used for the document title.
pub const APP_NAME: &str = "AI Resume Analyzer";
