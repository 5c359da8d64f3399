use super::checkpoint::Checkpoint;
use super::document::Document;
use super::state::{SharedState, StateKey, StateValue};

/// One analysis stage of the review pipeline.
///
/// `execute` must be total: degenerate input yields placeholder output, never
/// a failure.
pub trait ReviewPhase {
    fn name(&self) -> &'static str;

    /// Where the stage output is stored in [`SharedState`]
    fn key(&self) -> StateKey;

    /// Flag recorded when the human edits the document at this stage's checkpoint
    fn edit_key(&self) -> StateKey;

    fn checkpoint(&self) -> Checkpoint;

    fn execute(&self, document: &Document) -> StateValue;

    /// Human-readable lines describing `value`
    fn preview(&self, value: &StateValue) -> Vec<String>;

    /// Hook for stages whose edits must also rewrite stored output.
    fn apply_edit(&self, _state: &mut SharedState, _edited: &str) {}
}
