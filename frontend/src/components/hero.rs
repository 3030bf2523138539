//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload your resume and job description to get AI-powered insights"
            </p>
        </header>
    }
}
