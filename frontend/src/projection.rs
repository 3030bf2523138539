//! Mapping of an [`AnalysisResult`] onto the four result views.
//!
//! Each view reads only its own slice of the result and nothing here holds
//! state, so the same result always yields the same projection.

use crate::types::AnalysisResult;

/// Shown instead of an empty tag list.
pub const ALL_KEYWORDS_PRESENT: &str = "Great job! You've included all important keywords.";

/// Shown for a qualitative field the service left empty.
pub const NOT_AVAILABLE: &str = "Not available.";

/// Qualitative tier of a 0-100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    /// Below 60
    Low,
    /// 60 to 79
    Medium,
    /// 80 and above
    High,
}

impl ScoreBand {
    /// Bands a score, clamping it to 0..=100 first.
    pub fn from_score(score: i64) -> Self {
        match clamp_score(score) {
            80.. => ScoreBand::High,
            60..=79 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Low => "low",
            ScoreBand::Medium => "medium",
            ScoreBand::High => "high",
        }
    }

    /// Fill colour of gauges and bars.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Low => "#F44336",
            ScoreBand::Medium => "#FFC107",
            ScoreBand::High => "#4CAF50",
        }
    }

    /// Sentence displayed under the ATS gauge.
    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Low => "Your resume needs significant improvements for this job.",
            ScoreBand::Medium => "Your resume matches partially with this job description.",
            ScoreBand::High => "Your resume is well-matched to this job description!",
        }
    }
}

/// Clamps a score into 0..=100.
pub fn clamp_score(score: i64) -> u8 {
    score.clamp(0, 100) as u8
}

/// A score with its band, as drawn by a gauge or bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreView {
    /// Score as received, shown verbatim
    pub value: i64,
    /// Clamped value used for the fill width
    pub percent: u8,
    pub band: ScoreBand,
}

impl ScoreView {
    pub fn new(score: i64) -> Self {
        Self {
            value: score,
            percent: clamp_score(score),
            band: ScoreBand::from_score(score),
        }
    }

    /// `"85/100"`
    pub fn display(&self) -> String {
        format!("{}/100", self.value)
    }

    /// Inline style of the fill element.
    pub fn fill_style(&self) -> String {
        format!("width: {}%; background-color: {};", self.percent, self.band.color())
    }
}

/// Missing keywords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeywordsView {
    /// One tag per keyword, in service order
    Tags(Vec<String>),
    /// Nothing is missing
    AllPresent(&'static str),
}

impl KeywordsView {
    pub fn new(keywords: &[String]) -> Self {
        if keywords.is_empty() {
            KeywordsView::AllPresent(ALL_KEYWORDS_PRESENT)
        } else {
            KeywordsView::Tags(keywords.to_vec())
        }
    }
}

/// Improvement suggestions, unfiltered and in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionsView {
    pub items: Vec<String>,
}

impl SuggestionsView {
    pub fn new(suggestions: &[String]) -> Self {
        Self {
            items: suggestions.to_vec(),
        }
    }
}

/// Qualitative insights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightsView {
    pub tone: String,
    pub readability: String,
    pub readability_score: ScoreView,
    pub achievement_analysis: String,
    pub achievement_suggestions: Vec<String>,
}

/// All four views of one result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultProjection {
    pub score: ScoreView,
    pub keywords: KeywordsView,
    pub suggestions: SuggestionsView,
    pub insights: InsightsView,
}

impl ResultProjection {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let insights = &result.ai_insights;
        Self {
            score: ScoreView::new(result.ats_score),
            keywords: KeywordsView::new(&result.missing_keywords),
            suggestions: SuggestionsView::new(&result.improvement_suggestions),
            insights: InsightsView {
                tone: or_not_available(&insights.tone_analysis),
                readability: or_not_available(&insights.readability),
                readability_score: ScoreView::new(insights.readability_score),
                achievement_analysis: or_not_available(&insights.achievement_analysis),
                achievement_suggestions: insights.achievement_suggestions.clone(),
            },
        }
    }
}

fn or_not_available(text: &str) -> String {
    if text.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AiInsights;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
    }

    #[test]
    fn test_out_of_range_scores_clamp() {
        assert_eq!(ScoreBand::from_score(-20), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(250), ScoreBand::High);

        let view = ScoreView::new(250);
        assert_eq!(view.value, 250);
        assert_eq!(view.percent, 100);
        assert_eq!(view.display(), "250/100");
        assert_eq!(ScoreView::new(-5).percent, 0);
    }

    #[test]
    fn test_band_colors_and_sentences_are_distinct() {
        let bands = [ScoreBand::Low, ScoreBand::Medium, ScoreBand::High];
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                assert_ne!(a.color(), b.color());
                assert_ne!(a.description(), b.description());
            }
        }
        assert_eq!(ScoreBand::Medium.label(), "medium");
    }

    #[test]
    fn test_fill_style() {
        assert_eq!(
            ScoreView::new(85).fill_style(),
            "width: 85%; background-color: #4CAF50;"
        );
    }

    #[test]
    fn test_keywords_empty_state() {
        assert_eq!(KeywordsView::new(&[]), KeywordsView::AllPresent(ALL_KEYWORDS_PRESENT));
    }

    #[test]
    fn test_keywords_keep_order() {
        let keywords = vec!["leadership".to_string(), "SQL".to_string()];
        assert_eq!(KeywordsView::new(&keywords), KeywordsView::Tags(keywords.clone()));
    }

    #[test]
    fn test_suggestions_are_not_deduplicated() {
        let suggestions = vec![
            "Add metrics".to_string(),
            "Use action verbs".to_string(),
            "Add metrics".to_string(),
        ];
        assert_eq!(SuggestionsView::new(&suggestions).items, suggestions);
    }

    #[test]
    fn test_readability_uses_same_banding() {
        let result = AnalysisResult {
            ats_score: 40,
            ai_insights: AiInsights {
                readability_score: 60,
                ..AiInsights::default()
            },
            ..AnalysisResult::default()
        };
        let projection = ResultProjection::from_result(&result);

        assert_eq!(projection.score.band, ScoreBand::Low);
        assert_eq!(projection.insights.readability_score.band, ScoreBand::Medium);
    }

    #[test]
    fn test_empty_insight_text_gets_placeholder() {
        let projection = ResultProjection::from_result(&AnalysisResult::default());

        assert_eq!(projection.insights.tone, NOT_AVAILABLE);
        assert_eq!(projection.insights.readability, NOT_AVAILABLE);
        assert_eq!(projection.insights.achievement_analysis, NOT_AVAILABLE);
        assert!(projection.insights.achievement_suggestions.is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let result = AnalysisResult {
            ats_score: 72,
            missing_keywords: vec!["docker".to_string()],
            improvement_suggestions: vec!["Add metrics".to_string()],
            ai_insights: AiInsights {
                tone_analysis: "Balanced.".to_string(),
                ..AiInsights::default()
            },
        };
        assert_eq!(
            ResultProjection::from_result(&result),
            ResultProjection::from_result(&result)
        );
    }
}
