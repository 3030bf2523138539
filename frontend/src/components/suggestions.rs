use leptos::*;

use crate::projection::SuggestionsView;

#[component]
pub fn Suggestions(suggestions: SuggestionsView) -> impl IntoView {
    let items = suggestions.items;

    view! {
        <div class="suggestions">
            <h3>"Resume Improvement Suggestions"</h3>
            <ul class="suggestions-list">
                <For
                    each=move || items.clone().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, suggestion)| view! { <li>{suggestion}</li> }
                />
            </ul>
        </div>
    }
}
