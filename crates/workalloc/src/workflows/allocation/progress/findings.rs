use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Form section a finding was raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Officer,
    Activities,
    Competencies,
    CompetencyDetails,
}

impl Section {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Officer,
            Self::Activities,
            Self::Competencies,
            Self::CompetencyDetails,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Officer => "officer",
            Self::Activities => "activities",
            Self::Competencies => "competencies",
            Self::CompetencyDetails => "competency_details",
        }
    }
}

/// One variant per validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    OfficerNameEmpty,
    DesignationMissing,
    DesignationDescriptionMissing,
    UnmappedActivities,
    RoleLabelMissing,
    RoleDescriptionMissing,
    ActivityDescriptionMissing,
    SubmitToMissing,
    UnmappedCompetencies,
    CompetencyLabelMissing,
    CompetencyDescriptionMissing,
    CompetencyLevelMissing,
    CompetencyTypeMissing,
    CompetencyAreaMissing,
}

impl FindingKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OfficerNameEmpty => "Officer name is empty",
            Self::DesignationMissing => "Designation missing",
            Self::DesignationDescriptionMissing => "Designation description missing",
            Self::UnmappedActivities => "Unmapped activities",
            Self::RoleLabelMissing => "Role label missing",
            Self::RoleDescriptionMissing => "Role description missing",
            Self::ActivityDescriptionMissing => "Activity description missing",
            Self::SubmitToMissing => "Submit to is missing",
            Self::UnmappedCompetencies => "Unmapped competencies",
            Self::CompetencyLabelMissing => "Competency label missing",
            Self::CompetencyDescriptionMissing => "Competency description missing",
            Self::CompetencyLevelMissing => "Competency level missing",
            Self::CompetencyTypeMissing => "Competency type missing",
            Self::CompetencyAreaMissing => "Competency area missing",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Self::DesignationDescriptionMissing
            | Self::RoleDescriptionMissing
            | Self::CompetencyDescriptionMissing => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub const fn section(self) -> Section {
        match self {
            Self::OfficerNameEmpty
            | Self::DesignationMissing
            | Self::DesignationDescriptionMissing => Section::Officer,
            Self::UnmappedActivities
            | Self::RoleLabelMissing
            | Self::RoleDescriptionMissing
            | Self::ActivityDescriptionMissing
            | Self::SubmitToMissing => Section::Activities,
            Self::UnmappedCompetencies
            | Self::CompetencyLabelMissing
            | Self::CompetencyDescriptionMissing => Section::Competencies,
            Self::CompetencyLevelMissing
            | Self::CompetencyTypeMissing
            | Self::CompetencyAreaMissing => Section::CompetencyDetails,
        }
    }
}

/// A single validation result as rendered by the assistant card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub label: &'static str,
    pub severity: Severity,
}

impl From<FindingKind> for Finding {
    fn from(kind: FindingKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            severity: kind.severity(),
        }
    }
}

/// Findings split into the two badge buckets, order preserved within each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindingsBySeverity {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl FindingsBySeverity {
    pub fn partition(findings: &[Finding]) -> Self {
        let (errors, warnings) = findings
            .iter()
            .copied()
            .partition(|finding| finding.severity == Severity::Error);
        Self { errors, warnings }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_description_rules_are_warnings() {
        let warnings = [
            FindingKind::DesignationDescriptionMissing,
            FindingKind::RoleDescriptionMissing,
            FindingKind::CompetencyDescriptionMissing,
        ];
        assert!(warnings
            .iter()
            .all(|kind| kind.severity() == Severity::Warning));
        assert_eq!(FindingKind::SubmitToMissing.severity(), Severity::Error);
        assert_eq!(FindingKind::CompetencyAreaMissing.severity(), Severity::Error);
    }

    #[test]
    fn partition_keeps_relative_order() {
        let findings: Vec<Finding> = [
            FindingKind::OfficerNameEmpty,
            FindingKind::RoleDescriptionMissing,
            FindingKind::SubmitToMissing,
            FindingKind::CompetencyDescriptionMissing,
        ]
        .into_iter()
        .map(Finding::from)
        .collect();

        let buckets = FindingsBySeverity::partition(&findings);
        assert_eq!(
            buckets
                .errors
                .iter()
                .map(|finding| finding.label)
                .collect::<Vec<_>>(),
            vec!["Officer name is empty", "Submit to is missing"]
        );
        assert_eq!(buckets.warning_count(), 2);
        assert_eq!(buckets.warnings[0].kind, FindingKind::RoleDescriptionMissing);
    }
}
