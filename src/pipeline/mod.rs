pub mod checkpoint;
pub mod document;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;
pub mod state;

pub use checkpoint::{
    AutoApprove, Checkpoint, CheckpointDecision, DecisionProvider, ScriptedDecisions,
};
pub use document::{Document, DocumentOrigin};
pub use orchestrator::{AbortReason, CompletedRun, PipelineOrchestrator, PipelineOutcome};
pub use phase_trait::ReviewPhase;
pub use state::{SharedState, StateKey, StateValue};
