//! Work-allocation completeness scoring.
//!
//! A work-allocation document is edited in four independent form sections
//! (officer, activity roles, competency groups, competency details). The
//! progress engine validates the assembled draft into error/warning findings
//! and a weighted completion percentage; the editing session keeps that result
//! current in a shared store as the sections change.

pub mod document;
pub mod domain;
pub mod progress;
pub mod router;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use document::{export_findings_csv, section_summary, DocumentError};
pub use domain::{
    Activity, ActivityGroup, Competency, CompetencyDetail, CompetencyGroup, OfficerFormData,
    WorkAllocationDraft,
};
pub use progress::{
    EmptySectionPolicy, Finding, FindingKind, FindingsBySeverity, ProgressEngine, ProgressReport,
    ProgressView, ScoringConfig, Section, SectionScores, SectionWeights, Severity, WeightsError,
};
pub use router::{allocation_router, AllocationState};
pub use session::{DraftFeeds, DraftInputs, EditingSession};
pub use store::{ProgressPublisher, ProgressSnapshot, ProgressStore, PublishError};
