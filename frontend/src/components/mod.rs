//! UI Components for the Resume Analyzer application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Submission Components
//! - [`Uploader`] - Resume picker, job description and submit button
//! - [`JobDescriptionInput`] - Job description text area
//! - [`ProgressIndicator`] - Shown while the analysis is running
//! - [`ErrorNotice`] - Request failure with a retry action
//!
//! # Result Components
//! - [`ResultsDisplay`] - Lays out the four result views
//! - [`ScoreGauge`] - ATS compatibility score
//! - [`MissingKeywords`] - Missing keyword tags
//! - [`Suggestions`] - Improvement suggestions
//! - [`Insights`] - Tone, readability and achievement insights

mod hero;
mod footer;
mod uploader;
mod job_description;
mod progress;
mod error_notice;
mod results;
mod score_gauge;
mod missing_keywords;
mod suggestions;
mod insights;

pub use hero::*;
pub use footer::*;
pub use uploader::*;
pub use job_description::*;
pub use progress::*;
pub use error_notice::*;
pub use results::*;
pub use score_gauge::*;
pub use missing_keywords::*;
pub use suggestions::*;
pub use insights::*;
