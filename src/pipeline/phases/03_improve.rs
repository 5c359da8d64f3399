//! Title and intro rewrite suggestions

use super::markdown_helper::{first_heading, first_paragraph, truncate_chars};
use crate::pipeline::checkpoint::Checkpoint;
use crate::pipeline::document::Document;
use crate::pipeline::phase_trait::ReviewPhase;
use crate::pipeline::state::{SharedState, StateKey, StateValue};
use serde::Serialize;

pub const TITLE_SUFFIX: &str = " — A concise RAG & multi-agent assistant";
pub const PLACEHOLDER_TITLE: &str = "Project Title";
pub const FALLBACK_INTRO: &str = "This repository implements a multi-agent assistant that reviews GitHub repositories and recommends improvements.";
pub const INTRO_MAX_CHARS: usize = 320;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentSuggestions {
    pub suggested_title: String,
    pub suggested_intro: String,
}

pub fn improve(readme: &str) -> ContentSuggestions {
    let text = readme.trim();

    let (title, body) = match first_heading(text) {
        Some(heading) => (heading.title, &text[heading.end..]),
        None => (PLACEHOLDER_TITLE, text),
    };

    let paragraph = first_paragraph(body);
    let suggested_intro = if paragraph.is_empty() {
        FALLBACK_INTRO.to_string()
    } else {
        truncate_chars(paragraph, INTRO_MAX_CHARS)
    };

    ContentSuggestions {
        suggested_title: format!("{}{}", title, TITLE_SUFFIX),
        suggested_intro,
    }
}

pub struct ImprovePhase;

impl ReviewPhase for ImprovePhase {
    fn name(&self) -> &'static str {
        "Content Improver"
    }

    fn key(&self) -> StateKey {
        StateKey::Improvements
    }

    fn edit_key(&self) -> StateKey {
        StateKey::EditedAfterImprovements
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            stage: self.name(),
            prompt: "Proceed to final Reviewer?",
            edit_header: "Edit improved intro/title to use in final report:",
        }
    }

    fn execute(&self, document: &Document) -> StateValue {
        StateValue::Improvements(improve(document.text()))
    }

    fn preview(&self, value: &StateValue) -> Vec<String> {
        match value {
            StateValue::Improvements(s) => vec![
                format!("Suggested Title: {}", s.suggested_title),
                format!("Suggested Intro (preview): {}", s.suggested_intro),
            ],
            _ => Vec::new(),
        }
    }

    /// The reviewer reads state, not the document, so the human's text
    /// replaces the suggested intro directly.
    fn apply_edit(&self, state: &mut SharedState, edited: &str) {
        if let Some(suggestions) = state.improvements_mut() {
            suggestions.suggested_intro = edited.to_string();
        }
    }
}
