//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-note">
                "Your resume is sent to the analysis service only when you click Analyze."
            </div>
        </footer>
    }
}
