//! Section and completeness analysis

use super::markdown_helper::{has_heading, take_chars};
use crate::pipeline::checkpoint::Checkpoint;
use crate::pipeline::document::Document;
use crate::pipeline::phase_trait::ReviewPhase;
use crate::pipeline::state::{StateKey, StateValue};
use serde::Serialize;

const EXCERPT_CHARS: usize = 1000;
const MIN_DESCRIPTION_WORDS: usize = 100;

/// Which common README sections were detected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionFlags {
    pub title: bool,
    pub installation: bool,
    pub usage: bool,
    pub contributing: bool,
    pub license: bool,
    pub examples: bool,
}

impl SectionFlags {
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            title: has_heading(text),
            installation: lower.contains("installation"),
            usage: lower.contains("usage"),
            contributing: lower.contains("contributing"),
            license: lower.contains("license"),
            examples: lower.contains("example"),
        }
    }

    /// Names of the detected sections, in a fixed order.
    pub fn found(&self) -> Vec<&'static str> {
        [
            ("title", self.title),
            ("installation", self.installation),
            ("usage", self.usage),
            ("contributing", self.contributing),
            ("license", self.license),
            ("examples", self.examples),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub word_count: usize,
    pub sections: SectionFlags,
    pub suggestions: Vec<String>,
    pub readme_excerpt: String,
}

pub fn analyze(readme: &str) -> AnalysisReport {
    let text = readme.trim();
    let word_count = text.split_whitespace().count();
    let sections = SectionFlags::detect(text);

    let mut suggestions = Vec::new();
    if !sections.title {
        suggestions.push("Add a short, descriptive title at the top (H1).".to_string());
    }
    if !sections.installation {
        suggestions.push(
            "Add an Installation section with 3 steps (venv, install, .env).".to_string(),
        );
    }
    if !sections.usage {
        suggestions.push("Add Usage examples and example CLI commands.".to_string());
    }
    if word_count < MIN_DESCRIPTION_WORDS {
        suggestions.push(
            "Consider expanding the README with a short project description (100+ words)."
                .to_string(),
        );
    }

    let summary = format!(
        "README length: {} words. Sections found: {}.",
        word_count,
        sections.found().join(", ")
    );

    AnalysisReport {
        summary,
        word_count,
        sections,
        suggestions,
        readme_excerpt: take_chars(text, EXCERPT_CHARS).to_string(),
    }
}

pub struct AnalyzePhase;

impl ReviewPhase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "Repo Analyzer"
    }

    fn key(&self) -> StateKey {
        StateKey::Analyzer
    }

    fn edit_key(&self) -> StateKey {
        StateKey::EditedAfterAnalyzer
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            stage: self.name(),
            prompt: "Proceed to Tag Recommender?",
            edit_header: "Edit README excerpt (this will be used by next agents):",
        }
    }

    fn execute(&self, document: &Document) -> StateValue {
        StateValue::Analysis(analyze(document.text()))
    }

    fn preview(&self, value: &StateValue) -> Vec<String> {
        let StateValue::Analysis(report) = value else {
            return Vec::new();
        };
        let mut lines = vec!["Analyzer summary:".to_string(), report.summary.clone()];
        if !report.suggestions.is_empty() {
            lines.push(String::new());
            lines.push("Suggestions:".to_string());
            lines.extend(report.suggestions.iter().map(|s| format!(" - {}", s)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let report = analyze("");
        assert_eq!(report.word_count, 0);
        assert!(report.sections.found().is_empty());
        assert_eq!(report.summary, "README length: 0 words. Sections found: .");
        assert_eq!(report.suggestions.len(), 4);
        assert_eq!(report.readme_excerpt, "");
    }

    #[test]
    fn test_word_count_is_whitespace_tokens() {
        let text = "  one\ttwo\n\nthree   four  ";
        assert_eq!(analyze(text).word_count, 4);
    }

    #[test]
    fn test_detects_sections_case_insensitively() {
        let text = "# Tool\n\n## INSTALLATION\n## Usage\nContributing\nLicense: MIT\nExamples";
        let report = analyze(text);
        assert_eq!(
            report.sections.found(),
            vec!["title", "installation", "usage", "contributing", "license", "examples"]
        );
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].contains("100+ words"));
    }

    #[test]
    fn test_widget_readme() {
        let report = analyze("# Widget\n\nA simple installation and usage example.");
        assert_eq!(report.word_count, 8);
        assert!(report.sections.title);
        assert!(report.sections.installation);
        assert!(report.sections.usage);
        assert!(report.sections.examples);
        assert!(!report.sections.contributing);
        assert!(!report.sections.license);
        assert_eq!(
            report.summary,
            "README length: 8 words. Sections found: title, installation, usage, examples."
        );
        assert_eq!(
            report.suggestions,
            vec!["Consider expanding the README with a short project description (100+ words)."]
        );
    }

    #[test]
    fn test_missing_sections_produce_suggestions() {
        let report = analyze("just some words");
        assert!(report.suggestions[0].contains("title"));
        assert!(report.suggestions[1].contains("Installation"));
        assert!(report.suggestions[2].contains("Usage"));
    }

    #[test]
    fn test_long_readme_has_no_length_suggestion() {
        let text = format!("# T\ninstallation usage {}", "word ".repeat(120));
        assert!(analyze(&text).suggestions.is_empty());
    }

    #[test]
    fn test_excerpt_is_first_1000_chars_of_trimmed_input() {
        let text = format!("   {}", "é".repeat(1500));
        let report = analyze(&text);
        assert_eq!(report.readme_excerpt.chars().count(), 1000);
        assert!(report.readme_excerpt.starts_with('é'));
    }

    #[test]
    fn test_idempotent() {
        let text = "# A\n\nSome usage text.";
        assert_eq!(analyze(text), analyze(text));
    }
}
