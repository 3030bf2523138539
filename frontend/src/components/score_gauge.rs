//! ATS compatibility gauge

use leptos::*;

use crate::projection::ScoreView;

#[component]
pub fn ScoreGauge(score: ScoreView) -> impl IntoView {
    let color = format!("color: {};", score.band.color());

    view! {
        <div class="score-gauge">
            <h3>"ATS Compatibility Score"</h3>
            <div class="gauge-container">
                <div class="gauge">
                    <div class="gauge-fill" style=score.fill_style()></div>
                </div>
                <div class="gauge-value" style=color>
                    {score.display()}
                </div>
            </div>
            <p class=format!("score-description band-{}", score.band.label())>
                {score.band.description()}
            </p>
        </div>
    }
}
