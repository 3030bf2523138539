//! Submission form: resume picker, job description and submit button.
//!
//! The form only collects input. Submitting hands the accepted file and the
//! description to the shell, which drives the workflow.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::JobDescriptionInput;
use crate::validation::{can_submit, FileField};
use crate::RESUME_ACCEPT;

#[component]
pub fn Uploader(on_submit: Callback<(Option<File>, String)>) -> impl IntoView {
    let file_field = create_rw_signal(FileField::<File>::default());
    let (job_description, set_job_description) = create_signal(String::new());

    let submittable = move || {
        let text = job_description.get();
        file_field.with(|field| can_submit(field.accepted(), &text))
    };

    // A new pick replaces the previous file; dismissing the picker keeps it
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        file_field.update(|field| {
            field.select(file);
        });
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let resume = file_field.with_untracked(|field| field.accepted().cloned());
        on_submit.call((resume, job_description.get_untracked()));
    };

    view! {
        <form class="uploader-form" on:submit=handle_submit>
            <div class="file-upload-container">
                <h2>"Upload Resume"</h2>
                <input
                    type="file"
                    id="resume-upload"
                    accept=RESUME_ACCEPT
                    class="file-input"
                    on:change=on_file_change
                />
                <label for="resume-upload" class="file-label">
                    {move || {
                        file_field
                            .with(|field| field.label())
                            .unwrap_or_else(|| "Choose PDF or DOCX file".to_string())
                    }}
                </label>
                <Show
                    when=move || file_field.with(|field| field.rejection().is_some())
                    fallback=|| view! { }
                >
                    <p class="error-message">
                        {move || file_field.with(|field| field.rejection().map(|r| r.hint()).unwrap_or_default())}
                    </p>
                </Show>
            </div>

            <JobDescriptionInput value=job_description set_value=set_job_description/>

            <button
                type="submit"
                class="submit-button"
                disabled=move || !submittable()
            >
                "Analyze Resume"
            </button>
        </form>
    }
}
