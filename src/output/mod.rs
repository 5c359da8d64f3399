//! Persistence of run artifacts
//!
//! The orchestrator never touches the filesystem directly; it hands the final
//! state snapshot and report to an [`OutputSink`].

mod sink;

pub use sink::{DirectorySink, MemorySink, OutputSink, RunArtifacts, RECOMMENDATIONS_HEADER};
