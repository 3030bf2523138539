//! Job description text area.

use leptos::*;

use crate::validation::{validate_description, Validation};

#[component]
pub fn JobDescriptionInput(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    // No hint before the user has typed anything
    let (touched, set_touched) = create_signal(false);

    let hint = move || match validate_description(&value.get()) {
        Validation::Rejected(reason) if touched.get() => Some(reason.hint()),
        _ => None,
    };

    view! {
        <div class="job-description-container">
            <h2>"Job Description"</h2>
            <textarea
                placeholder="Paste the job description here..."
                class="job-description-input"
                rows="10"
                prop:value=value
                on:input=move |ev| {
                    set_touched.set(true);
                    set_value.set(event_target_value(&ev));
                }
            ></textarea>
            {move || hint().map(|hint| view! { <p class="error-message">{hint}</p> })}
        </div>
    }
}
