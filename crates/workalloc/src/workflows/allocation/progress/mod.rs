mod config;
mod findings;
pub mod rules;

pub use config::{EmptySectionPolicy, ScoringConfig, SectionWeights, WeightsError};
pub use findings::{Finding, FindingKind, FindingsBySeverity, Section, Severity};

use super::domain::{OfficerFormData, WorkAllocationDraft};
use serde::Serialize;

/// Stateless scorer applying the rubric to a draft.
#[derive(Debug, Clone, Default)]
pub struct ProgressEngine {
    config: ScoringConfig,
}

impl ProgressEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Recompute findings and progress for the whole draft from scratch.
    pub fn evaluate(&self, draft: &WorkAllocationDraft) -> ProgressReport {
        let policy = self.config.empty_section;
        let mut findings = Vec::new();

        let officer = match &draft.officer {
            Some(officer) => {
                findings.extend(rules::officer_findings(officer));
                rules::officer_progress(officer)
            }
            None => {
                findings.extend(rules::officer_findings(&OfficerFormData::default()));
                0.0
            }
        };

        let activities = draft.activity_groups.as_deref().map_or(0.0, |groups| {
            findings.extend(rules::activity_findings(groups));
            rules::activity_progress(groups, policy)
        });

        let competencies = draft.competency_groups.as_deref().map_or(0.0, |groups| {
            findings.extend(rules::competency_findings(groups));
            rules::competency_progress(groups, policy)
        });

        let competency_details = draft.competency_details.as_deref().map_or(0.0, |details| {
            findings.extend(rules::competency_detail_findings(details));
            rules::competency_detail_progress(details, policy)
        });

        let sections = SectionScores {
            officer,
            activities,
            competencies,
            competency_details,
        };

        ProgressReport {
            percentage: self.config.weights.overall(&sections),
            sections,
            findings,
        }
    }
}

/// Partial completion of each form section, each in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectionScores {
    pub officer: f64,
    pub activities: f64,
    pub competencies: f64,
    pub competency_details: f64,
}

impl SectionScores {
    pub fn get(&self, section: Section) -> f64 {
        match section {
            Section::Officer => self.officer,
            Section::Activities => self.activities,
            Section::Competencies => self.competencies,
            Section::CompetencyDetails => self.competency_details,
        }
    }
}

/// Result of one evaluation, in section order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub percentage: u8,
    pub sections: SectionScores,
    pub findings: Vec<Finding>,
}

impl ProgressReport {
    pub fn by_severity(&self) -> FindingsBySeverity {
        FindingsBySeverity::partition(&self.findings)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn view(&self) -> ProgressView {
        let findings = self.by_severity();
        ProgressView {
            percentage: self.percentage,
            sections: self.sections,
            error_count: findings.error_count(),
            warning_count: findings.warning_count(),
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

/// Serialized shape returned to callers rendering the progress ring and badges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub percentage: u8,
    pub sections: SectionScores,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}
