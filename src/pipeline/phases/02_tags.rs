//! Frequency-based keyword and tag recommendation

use crate::pipeline::checkpoint::Checkpoint;
use crate::pipeline::document::Document;
use crate::pipeline::phase_trait::ReviewPhase;
use crate::pipeline::state::{StateKey, StateValue};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_TAG_COUNT: usize = 8;
const MIN_TOKEN_CHARS: usize = 3;

pub const STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "is", "for", "this", "that", "on", "with", "by", "as",
    "it", "an", "be", "are", "or", "from", "your", "we", "our", "you",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagRecommendation {
    pub tags: Vec<String>,
    /// `(token, count)` pairs, most frequent first
    pub keywords: Vec<(String, usize)>,
}

fn punctuation_regex() -> &'static Regex {
    static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION_REGEX.get_or_init(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"))
}

/// Top `k` tokens by descending count. Ties keep first-seen order.
pub fn top_keywords(text: &str, k: usize) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let normalized = punctuation_regex().replace_all(&lowered, " ");

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in normalized.split_whitespace() {
        if token.chars().count() < MIN_TOKEN_CHARS || STOPWORDS.contains(&token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token.to_string(), 1));
            }
        }
    }

    // Stable sort preserves first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);
    counts
}

pub fn recommend(text: &str, k: usize) -> TagRecommendation {
    let keywords = top_keywords(text, k);
    let tags = keywords.iter().map(|(word, _)| word.replace(' ', "-")).collect();
    TagRecommendation { tags, keywords }
}

pub struct TagsPhase {
    pub max_tags: usize,
}

impl Default for TagsPhase {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_TAG_COUNT,
        }
    }
}

impl ReviewPhase for TagsPhase {
    fn name(&self) -> &'static str {
        "Tag Recommender"
    }

    fn key(&self) -> StateKey {
        StateKey::Tags
    }

    fn edit_key(&self) -> StateKey {
        StateKey::EditedAfterTags
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            stage: self.name(),
            prompt: "Proceed to Content Improver (title/intro suggestions)?",
            edit_header: "Edit content (title/intro) to use next:",
        }
    }

    fn execute(&self, document: &Document) -> StateValue {
        StateValue::Tags(recommend(document.text(), self.max_tags))
    }

    fn preview(&self, value: &StateValue) -> Vec<String> {
        match value {
            StateValue::Tags(rec) => vec![format!("Suggested tags: {}", rec.tags.join(", "))],
            _ => Vec::new(),
        }
    }
}
