//! Result views: one projection, four independent sections.

use leptos::*;

use crate::components::{Insights, MissingKeywords, ScoreGauge, Suggestions};
use crate::projection::ResultProjection;
use crate::AnalysisResult;

#[component]
pub fn ResultsDisplay(result: AnalysisResult) -> impl IntoView {
    let ResultProjection {
        score,
        keywords,
        suggestions,
        insights,
    } = ResultProjection::from_result(&result);

    view! {
        <div class="results-display">
            <h2>"Resume Analysis Results"</h2>

            <div class="results-grid">
                <div class="score-section">
                    <ScoreGauge score=score/>
                </div>

                <div class="keywords-section">
                    <MissingKeywords keywords=keywords/>
                </div>

                <div class="suggestions-section">
                    <Suggestions suggestions=suggestions/>
                </div>

                <div class="insights-section">
                    <Insights insights=insights/>
                </div>
            </div>
        </div>
    }
}
