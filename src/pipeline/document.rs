//! The working README text handed from stage to stage

/// Where the current text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    Fetched,
    /// Replaced by a human at the checkpoint following the named stage
    EditedAfter(&'static str),
}

/// Working text for the pipeline. Stages only ever see a shared reference;
/// an edit produces a new `Document` that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    origin: DocumentOrigin,
}

impl Document {
    pub fn fetched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: DocumentOrigin::Fetched,
        }
    }

    pub fn edited(text: impl Into<String>, stage: &'static str) -> Self {
        Self {
            text: text.into(),
            origin: DocumentOrigin::EditedAfter(stage),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    pub fn is_edited(&self) -> bool {
        matches!(self.origin, DocumentOrigin::EditedAfter(_))
    }
}
