//! Human checkpoints between stages
//!
//! After each stage the orchestrator asks a [`DecisionProvider`] whether to
//! continue. Interactive runs plug in the console prompt; non-interactive runs
//! use [`AutoApprove`]; tests script the answers with [`ScriptedDecisions`].

use anyhow::Result;
use std::collections::VecDeque;

/// What the human decided at a checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckpointDecision {
    Proceed,
    Abort,
    /// Continue, replacing the working document with this text
    ProceedWithEdit(String),
}

impl CheckpointDecision {
    pub fn label(&self) -> &'static str {
        match self {
            CheckpointDecision::Proceed => "proceed",
            CheckpointDecision::Abort => "abort",
            CheckpointDecision::ProceedWithEdit(_) => "edit",
        }
    }
}

/// Describes the pause point presented to the human
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Stage that just finished
    pub stage: &'static str,
    /// Yes/no/edit question
    pub prompt: &'static str,
    /// Header shown before capturing edited text
    pub edit_header: &'static str,
}

pub trait DecisionProvider {
    fn decide(&mut self, checkpoint: &Checkpoint) -> Result<CheckpointDecision>;

    /// False when checkpoints are skipped entirely.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Non-interactive mode: every checkpoint proceeds unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoApprove;

impl DecisionProvider for AutoApprove {
    fn decide(&mut self, _checkpoint: &Checkpoint) -> Result<CheckpointDecision> {
        Ok(CheckpointDecision::Proceed)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Replays a fixed list of decisions, proceeding once the list runs out.
/// Records every checkpoint it was asked about.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    decisions: VecDeque<CheckpointDecision>,
    seen: Vec<&'static str>,
}

impl ScriptedDecisions {
    pub fn new(decisions: impl IntoIterator<Item = CheckpointDecision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Stages whose checkpoints have been presented, in order.
    pub fn seen(&self) -> &[&'static str] {
        &self.seen
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn decide(&mut self, checkpoint: &Checkpoint) -> Result<CheckpointDecision> {
        self.seen.push(checkpoint.stage);
        Ok(self
            .decisions
            .pop_front()
            .unwrap_or(CheckpointDecision::Proceed))
    }
}
