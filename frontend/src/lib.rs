//! AI Resume Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that sends a resume and a job description to the
//! analysis service and renders the returned assessment.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the Workflow signal), exactly one of:     │
//! │  ├── Idle        → Uploader (picker + job description)       │
//! │  ├── Submitting  → ProgressIndicator                         │
//! │  ├── Failed      → ErrorNotice + "Try Again"                 │
//! │  └── Succeeded   → ResultsDisplay + "Analyze Another Resume" │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Analysis result, file abstraction and errors
//! - [`validation`] - Resume and job description checks
//! - [`workflow`] - Submission lifecycle state machine
//! - [`projection`] - Result to view mapping (score bands, empty states)
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod workflow;
pub mod projection;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalysisResult, AiInsights,
    // Files
    FileLike,
    // Errors
    AppError, AppResult,
};

// Workflow
pub use workflow::{PendingRequest, Workflow, WorkflowState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The only mutable application state
    let workflow = create_rw_signal(Workflow::new());
    let state = create_memo(move |_| workflow.with(|w| w.state().clone()));

    let submit = Callback::new(move |(resume, job_description): (Option<File>, String)| {
        let Some(PendingRequest { ticket, input }) = workflow
            .try_update(|w| w.submit(resume, job_description))
            .flatten()
        else {
            return;
        };

        spawn_local(async move {
            let outcome = analyze_resume(input, BACKEND_URL).await;
            workflow.update(|w| {
                w.complete(ticket, outcome);
            });
        });
    });

    let reset = Callback::new(move |_: ()| {
        workflow.update(|w| {
            w.reset();
        });
    });

    view! {
        <Hero/>

        <div class="container">
            {move || match state.get() {
                WorkflowState::Idle => view! {
                    <div class="input-container">
                        <Uploader on_submit=submit/>
                    </div>
                }
                .into_view(),
                WorkflowState::Submitting => view! { <ProgressIndicator/> }.into_view(),
                WorkflowState::Failed(message) => view! {
                    <ErrorNotice message=message on_retry=reset/>
                }
                .into_view(),
                WorkflowState::Succeeded(result) => view! {
                    <div class="results-container">
                        <ResultsDisplay result=result/>
                        <button class="reset-button" on:click=move |_| reset.call(())>
                            "Analyze Another Resume"
                        </button>
                    </div>
                }
                .into_view(),
            }}
        </div>

        <Footer/>
    }
}
