//! Shared state accumulated across the pipeline
//!
//! An ordered map from a fixed set of keys to stage outputs. Keys are declared
//! in pipeline order, so iteration and the JSON snapshot follow the order in
//! which the stages ran.

use super::phases::analyze::AnalysisReport;
use super::phases::improve::ContentSuggestions;
use super::phases::tags::TagRecommendation;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKey {
    Analyzer,
    EditedAfterAnalyzer,
    Tags,
    EditedAfterTags,
    Improvements,
    EditedAfterImprovements,
}

impl StateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Analyzer => "analyzer",
            StateKey::EditedAfterAnalyzer => "edited_after_analyzer",
            StateKey::Tags => "tags",
            StateKey::EditedAfterTags => "edited_after_tags",
            StateKey::Improvements => "improvements",
            StateKey::EditedAfterImprovements => "edited_after_improvements",
        }
    }

    pub fn is_edit_flag(&self) -> bool {
        matches!(
            self,
            StateKey::EditedAfterAnalyzer
                | StateKey::EditedAfterTags
                | StateKey::EditedAfterImprovements
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StateValue {
    Analysis(AnalysisReport),
    Tags(TagRecommendation),
    Improvements(ContentSuggestions),
    Flag(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SharedState {
    entries: BTreeMap<StateKey, StateValue>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any earlier value.
    pub fn set(&mut self, key: StateKey, value: StateValue) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: StateKey) -> Option<&StateValue> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: StateKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = StateKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        match self.get(StateKey::Analyzer) {
            Some(StateValue::Analysis(report)) => Some(report),
            _ => None,
        }
    }

    pub fn tags(&self) -> Option<&TagRecommendation> {
        match self.get(StateKey::Tags) {
            Some(StateValue::Tags(tags)) => Some(tags),
            _ => None,
        }
    }

    pub fn improvements(&self) -> Option<&ContentSuggestions> {
        match self.get(StateKey::Improvements) {
            Some(StateValue::Improvements(suggestions)) => Some(suggestions),
            _ => None,
        }
    }

    pub fn improvements_mut(&mut self) -> Option<&mut ContentSuggestions> {
        match self.entries.get_mut(&StateKey::Improvements) {
            Some(StateValue::Improvements(suggestions)) => Some(suggestions),
            _ => None,
        }
    }

    /// Edit flags that are set, in pipeline order.
    pub fn edit_flags(&self) -> Vec<StateKey> {
        self.entries
            .iter()
            .filter(|(key, value)| key.is_edit_flag() && **value == StateValue::Flag(true))
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(title: &str) -> StateValue {
        StateValue::Improvements(ContentSuggestions {
            suggested_title: title.to_string(),
            suggested_intro: "intro".to_string(),
        })
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = SharedState::new();
        assert!(state.is_empty());
        assert!(state.analysis().is_none());
        assert!(state.tags().is_none());
        assert!(state.improvements().is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let mut state = SharedState::new();
        state.set(StateKey::Improvements, suggestions("first"));
        state.set(StateKey::Improvements, suggestions("second"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.improvements().unwrap().suggested_title, "second");
    }

    #[test]
    fn test_typed_getter_ignores_mismatched_value() {
        let mut state = SharedState::new();
        state.set(StateKey::Improvements, StateValue::Flag(true));
        assert!(state.improvements().is_none());
    }

    #[test]
    fn test_keys_follow_pipeline_order() {
        let mut state = SharedState::new();
        state.set(StateKey::Improvements, suggestions("t"));
        state.set(StateKey::EditedAfterAnalyzer, StateValue::Flag(true));
        state.set(
            StateKey::Tags,
            StateValue::Tags(TagRecommendation::default()),
        );
        let keys: Vec<_> = state.keys().collect();
        assert_eq!(
            keys,
            vec![
                StateKey::EditedAfterAnalyzer,
                StateKey::Tags,
                StateKey::Improvements
            ]
        );
    }

    #[test]
    fn test_edit_flags() {
        let mut state = SharedState::new();
        state.set(StateKey::EditedAfterTags, StateValue::Flag(true));
        state.set(StateKey::EditedAfterAnalyzer, StateValue::Flag(false));
        state.set(StateKey::Tags, StateValue::Tags(TagRecommendation::default()));
        assert_eq!(state.edit_flags(), vec![StateKey::EditedAfterTags]);
    }

    #[test]
    fn test_json_snapshot_uses_snake_case_keys() {
        let mut state = SharedState::new();
        state.set(StateKey::EditedAfterAnalyzer, StateValue::Flag(true));
        state.set(StateKey::Improvements, suggestions("Widget"));

        let json: serde_json::Value =
            serde_json::from_str(&state.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["edited_after_analyzer"], serde_json::json!(true));
        assert_eq!(json["improvements"]["suggested_title"], "Widget");
    }

    #[test]
    fn test_as_str_matches_serialized_name() {
        for key in [
            StateKey::Analyzer,
            StateKey::EditedAfterAnalyzer,
            StateKey::Tags,
            StateKey::EditedAfterTags,
            StateKey::Improvements,
            StateKey::EditedAfterImprovements,
        ] {
            let serialized = serde_json::to_value(key).unwrap();
            assert_eq!(serialized, serde_json::json!(key.as_str()));
        }
    }
}
