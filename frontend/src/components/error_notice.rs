//! Workflow-level failure notice.

use leptos::*;

#[component]
pub fn ErrorNotice(
    /// User-facing failure message
    message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <div class="error">"Error: " {message}</div>
            <button class="reset-button" on:click=move |_| on_retry.call(())>
                "Try Again"
            </button>
        </div>
    }
}
