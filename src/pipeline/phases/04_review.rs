//! Final report synthesis
//!
//! Reads the analyzer, tag and improvement outputs from the shared state and
//! flattens them into a plain-text report. A missing stage only drops its
//! section; it never fails.

use crate::pipeline::state::{SharedState, StateKey};

pub const REPORT_HEADER: &str = "Final Report — Multi-Agent Publication Reviewer";
const NO_ANALYSIS: &str = "No analysis available.";

pub fn synthesize(state: &SharedState) -> String {
    let mut lines = vec![format!("{}\n", REPORT_HEADER)];

    let analysis = state.analysis();
    lines.push(
        analysis
            .map(|a| a.summary.clone())
            .unwrap_or_else(|| NO_ANALYSIS.to_string()),
    );

    if let Some(suggestions) = analysis.map(|a| &a.suggestions).filter(|s| !s.is_empty()) {
        lines.push("\nTop Suggestions:".to_string());
        lines.extend(suggestions.iter().map(|s| format!(" - {}", s)));
    }

    if let Some(tags) = state.tags().map(|t| &t.tags).filter(|t| !t.is_empty()) {
        lines.push(format!("\nSuggested tags: {}", tags.join(", ")));
    }

    if let Some(improvements) = state.improvements() {
        lines.push("\nContent improvement suggestions:".to_string());
        lines.push(format!(" * Title: {}", improvements.suggested_title));
        lines.push(format!(" * Intro (preview): {}", improvements.suggested_intro));
    }

    let edited: Vec<&str> = state
        .edit_flags()
        .into_iter()
        .filter_map(edited_stage_name)
        .collect();
    if !edited.is_empty() {
        lines.push(format!("\nHuman edits applied after: {}", edited.join(", ")));
    }

    lines.join("\n")
}

fn edited_stage_name(key: StateKey) -> Option<&'static str> {
    match key {
        StateKey::EditedAfterAnalyzer => Some("Repo Analyzer"),
        StateKey::EditedAfterTags => Some("Tag Recommender"),
        StateKey::EditedAfterImprovements => Some("Content Improver"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::analyze::analyze;
    use crate::pipeline::phases::improve::improve;
    use crate::pipeline::phases::tags::{recommend, TagRecommendation};
    use crate::pipeline::state::StateValue;

    #[test]
    fn test_empty_state() {
        let report = synthesize(&SharedState::new());
        assert_eq!(report, format!("{}\n\n{}", REPORT_HEADER, NO_ANALYSIS));
    }

    #[test]
    fn test_full_state_section_order() {
        let readme = "# Widget\n\nA widget for widget lovers.";
        let mut state = SharedState::new();
        state.set(StateKey::Analyzer, StateValue::Analysis(analyze(readme)));
        state.set(StateKey::Tags, StateValue::Tags(recommend(readme, 8)));
        state.set(StateKey::Improvements, StateValue::Improvements(improve(readme)));

        let report = synthesize(&state);
        let header = report.find(REPORT_HEADER).unwrap();
        let summary = report.find("README length:").unwrap();
        let suggestions = report.find("Top Suggestions:").unwrap();
        let tags = report.find("Suggested tags: widget").unwrap();
        let title = report
            .find(" * Title: Widget — A concise RAG & multi-agent assistant")
            .unwrap();
        let intro = report
            .find(" * Intro (preview): A widget for widget lovers.")
            .unwrap();
        assert!(header < summary && summary < suggestions);
        assert!(suggestions < tags && tags < title && title < intro);
        assert!(!report.contains("Human edits"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut state = SharedState::new();
        state.set(StateKey::Tags, StateValue::Tags(TagRecommendation::default()));
        let report = synthesize(&state);
        assert!(!report.contains("Suggested tags"));
        assert!(!report.contains("Top Suggestions"));
        assert!(!report.contains("Content improvement"));
    }

    #[test]
    fn test_edits_are_reported() {
        let mut state = SharedState::new();
        state.set(StateKey::EditedAfterAnalyzer, StateValue::Flag(true));
        state.set(StateKey::EditedAfterImprovements, StateValue::Flag(true));
        let report = synthesize(&state);
        assert!(report.ends_with("Human edits applied after: Repo Analyzer, Content Improver"));
    }
}
