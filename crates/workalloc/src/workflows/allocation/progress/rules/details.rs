use super::super::config::EmptySectionPolicy;
use super::super::findings::{Finding, FindingKind};
use super::FieldTally;
use crate::workflows::allocation::domain::{is_blank, CompetencyDetail};

pub fn competency_detail_findings(details: &[CompetencyDetail]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for detail in details {
        if is_blank(&detail.comp_level) {
            findings.push(FindingKind::CompetencyLevelMissing.into());
        }
        if is_blank(&detail.comp_type) {
            findings.push(FindingKind::CompetencyTypeMissing.into());
        }
        if is_blank(&detail.comp_area) {
            findings.push(FindingKind::CompetencyAreaMissing.into());
        }
    }

    findings
}

pub fn competency_detail_progress(details: &[CompetencyDetail], policy: EmptySectionPolicy) -> f64 {
    let mut tally = FieldTally::default();
    for detail in details {
        tally.record(!is_blank(&detail.comp_level));
        tally.record(!is_blank(&detail.comp_type));
        tally.record(!is_blank(&detail.comp_area));
    }
    tally.resolve(0, policy)
}
