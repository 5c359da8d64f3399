// Review pipeline stages
//
// Each stage is a pure function of the working document plus a `ReviewPhase`
// wrapper the orchestrator drives. The reviewer is not a phase: it runs once
// over the whole shared state.

pub mod markdown_helper;

#[path = "01_analyze.rs"]
pub mod analyze;
#[path = "02_tags.rs"]
pub mod tags;
#[path = "03_improve.rs"]
pub mod improve;
#[path = "04_review.rs"]
pub mod review;

pub use analyze::{AnalysisReport, AnalyzePhase, SectionFlags};
pub use improve::{ContentSuggestions, ImprovePhase};
pub use review::synthesize;
pub use tags::{TagRecommendation, TagsPhase};

use super::phase_trait::ReviewPhase;

/// The standard stage sequence: analyzer, tag recommender, content improver.
pub fn default_phases() -> Vec<Box<dyn ReviewPhase>> {
    vec![
        Box::new(AnalyzePhase),
        Box::new(TagsPhase::default()),
        Box::new(ImprovePhase),
    ]
}
