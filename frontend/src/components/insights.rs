//! Qualitative insights: tone, readability and achievements.

use leptos::*;

use crate::projection::InsightsView;

#[component]
pub fn Insights(insights: InsightsView) -> impl IntoView {
    let InsightsView {
        tone,
        readability,
        readability_score,
        achievement_analysis,
        achievement_suggestions,
    } = insights;

    view! {
        <div class="insights">
            <h3>"AI-Generated Insights"</h3>

            <div class="insight-card">
                <h4>"Tone & Formality"</h4>
                <p>{tone}</p>
            </div>

            <div class="insight-card">
                <h4>"Resume Readability"</h4>
                <p>{readability}</p>
                <div class="readability-bar">
                    <div class="readability-fill" style=readability_score.fill_style()></div>
                </div>
                <div class="readability-score">
                    "Score: " {readability_score.display()}
                </div>
            </div>

            <div class="insight-card">
                <h4>"Achievement Quantification"</h4>
                <p>{achievement_analysis}</p>
                <ul class="achievement-suggestions">
                    {achievement_suggestions
                        .into_iter()
                        .map(|suggestion| view! { <li>{suggestion}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
