use super::super::config::EmptySectionPolicy;
use super::super::findings::{Finding, FindingKind};
use super::FieldTally;
use crate::workflows::allocation::domain::{is_blank, split_unmapped, CompetencyGroup};

pub fn competency_findings(groups: &[CompetencyGroup]) -> Vec<Finding> {
    let (unmapped, mapped) = split_unmapped(groups);
    let mut findings = Vec::new();

    if unmapped.is_some_and(|bucket| !bucket.competencies.is_empty()) {
        findings.push(FindingKind::UnmappedCompetencies.into());
    }

    for competency in mapped.iter().flat_map(|group| &group.competencies) {
        if is_blank(&competency.comp_name) {
            findings.push(FindingKind::CompetencyLabelMissing.into());
        }
        if is_blank(&competency.comp_description) {
            findings.push(FindingKind::CompetencyDescriptionMissing.into());
        }
    }

    findings
}

pub fn competency_progress(groups: &[CompetencyGroup], policy: EmptySectionPolicy) -> f64 {
    let (unmapped, mapped) = split_unmapped(groups);
    let mut tally = FieldTally::default();

    for competency in mapped.iter().flat_map(|group| &group.competencies) {
        tally.record(!is_blank(&competency.comp_name));
        tally.record(!is_blank(&competency.comp_description));
    }

    let waiting = unmapped.map_or(0, |bucket| bucket.competencies.len());
    tally.resolve(waiting, policy)
}
