use leptos::*;

use crate::projection::KeywordsView;

#[component]
pub fn MissingKeywords(keywords: KeywordsView) -> impl IntoView {
    let body = match keywords {
        KeywordsView::Tags(tags) => view! {
            <div class="keywords-container">
                {tags
                    .into_iter()
                    .map(|keyword| view! { <span class="keyword-pill">{keyword}</span> })
                    .collect_view()}
            </div>
        }
        .into_view(),
        KeywordsView::AllPresent(message) => view! { <p class="keywords-complete">{message}</p> }.into_view(),
    };

    view! {
        <div class="missing-keywords">
            <h3>"Missing Keywords"</h3>
            {body}
        </div>
    }
}
