//! Submission lifecycle.
//!
//! ```text
//!            submit (valid)          on_success
//!   Idle ──────────────────▶ Submitting ──────────▶ Succeeded
//!    ▲                           │                      │
//!    │                           │ on_failure           │
//!    │                           ▼                      │
//!    └───────── reset ──────── Failed ◀── reset ────────┘
//! ```
//!
//! [`Workflow::submit`] does not perform the request itself: it hands back a
//! [`PendingRequest`] which the caller sends and later reports through
//! [`Workflow::complete`]. Each request carries a [`Ticket`]; outcomes for
//! any other ticket than the one in flight are dropped.

use crate::types::{AnalysisResult, AppError, AppResult, FileLike};
use crate::validation::{validate_description, validate_file, Rejection};

/// Phase of the current submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WorkflowState {
    /// No pending or completed request
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// The service returned a result
    Succeeded(AnalysisResult),
    /// The request failed; holds a user-facing message
    Failed(String),
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Succeeded(_) | WorkflowState::Failed(_))
    }
}

/// Validated resume + job description.
///
/// Only [`SubmissionInput::new`] builds one, so an instance always passed
/// validation.
#[derive(Clone, Debug)]
pub struct SubmissionInput<F> {
    resume: F,
    job_description: String,
}

impl<F: FileLike> SubmissionInput<F> {
    pub fn new(resume: F, job_description: String) -> Result<Self, Rejection> {
        validate_file(&resume).into_result()?;
        validate_description(&job_description).into_result()?;
        Ok(Self {
            resume,
            job_description,
        })
    }

    pub fn resume(&self) -> &F {
        &self.resume
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn into_parts(self) -> (F, String) {
        (self.resume, self.job_description)
    }
}

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Request the caller must send after a successful [`Workflow::submit`].
#[derive(Debug)]
pub struct PendingRequest<F> {
    pub ticket: Ticket,
    pub input: SubmissionInput<F>,
}

/// Lifecycle state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workflow {
    state: WorkflowState,
    in_flight: Option<Ticket>,
    issued: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Ticket of the request currently in flight.
    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// `Idle -> Submitting`.
    ///
    /// Returns `None` without changing state when not idle or when the
    /// inputs do not validate.
    pub fn submit<F: FileLike>(
        &mut self,
        resume: Option<F>,
        job_description: String,
    ) -> Option<PendingRequest<F>> {
        if self.state != WorkflowState::Idle {
            log::debug!("⏸️ Submit ignored: a submission is already {}", self.state_name());
            return None;
        }

        let Some(resume) = resume else {
            log::warn!("⚠️ Submit refused: {}", Rejection::MissingFile);
            return None;
        };

        let input = match SubmissionInput::new(resume, job_description) {
            Ok(input) => input,
            Err(reason) => {
                log::warn!("⚠️ Submit refused: {}", reason);
                return None;
            }
        };

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);
        self.state = WorkflowState::Submitting;

        log::info!(
            "📤 Submitting {} for analysis ({} chars of job description)",
            input.resume().file_name(),
            input.job_description().chars().count()
        );

        Some(PendingRequest { ticket, input })
    }

    /// `Submitting -> Succeeded`. Returns whether the transition happened.
    pub fn on_success(&mut self, ticket: Ticket, result: AnalysisResult) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        log::info!("✅ Analysis complete: ATS score {}", result.ats_score);
        self.in_flight = None;
        self.state = WorkflowState::Succeeded(result);
        true
    }

    /// `Submitting -> Failed`. Returns whether the transition happened.
    pub fn on_failure(&mut self, ticket: Ticket, message: String) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        log::warn!("❌ Analysis failed: {}", message);
        self.in_flight = None;
        self.state = WorkflowState::Failed(message);
        true
    }

    /// Routes a request outcome to [`on_success`](Self::on_success) or
    /// [`on_failure`](Self::on_failure).
    pub fn complete(&mut self, ticket: Ticket, outcome: AppResult<AnalysisResult>) -> bool {
        match outcome {
            Ok(result) => self.on_success(ticket, result),
            Err(err) => {
                log::debug!("🔍 Request error: {}", err);
                self.on_failure(ticket, failure_message(&err))
            }
        }
    }

    /// Terminal state -> `Idle`, dropping any result. No-op while submitting.
    pub fn reset(&mut self) -> bool {
        match self.state {
            WorkflowState::Submitting => {
                log::debug!("⏸️ Reset ignored while a request is in flight");
                false
            }
            WorkflowState::Idle => true,
            WorkflowState::Succeeded(_) | WorkflowState::Failed(_) => {
                log::info!("🔄 Back to the submission form");
                self.state = WorkflowState::Idle;
                true
            }
        }
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        let current = self.in_flight == Some(ticket) && self.state == WorkflowState::Submitting;
        if !current {
            log::debug!("🔍 Ignoring stale outcome for {:?}", ticket);
        }
        current
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            WorkflowState::Idle => "idle",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Succeeded(_) => "succeeded",
            WorkflowState::Failed(_) => "failed",
        }
    }
}

/// Message stored in `Failed`; never empty.
fn failure_message(err: &AppError) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        "Failed to analyze resume".to_string()
    } else {
        message
    }
}
