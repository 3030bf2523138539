//! Indicator shown while the analysis request is in flight.

use leptos::*;

#[component]
pub fn ProgressIndicator() -> impl IntoView {
    view! {
        <div class="progress-section show" id="progressSection">
            <div class="progress-bar">
                <div class="progress-fill indeterminate"></div>
            </div>
            <div class="loading">"Analyzing your resume..."</div>
        </div>
    }
}
