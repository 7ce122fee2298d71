use super::super::findings::{Finding, FindingKind};
use crate::workflows::allocation::domain::{is_blank, OfficerFormData};

const NAME_WEIGHT: f64 = 40.0;
const POSITION_WEIGHT: f64 = 40.0;
const DESCRIPTION_WEIGHT: f64 = 20.0;

pub fn officer_findings(officer: &OfficerFormData) -> Vec<Finding> {
    let mut findings = Vec::new();

    if is_blank(&officer.officer_name) {
        findings.push(FindingKind::OfficerNameEmpty.into());
    }
    if is_blank(&officer.position) {
        findings.push(FindingKind::DesignationMissing.into());
    }
    if is_blank(&officer.position_description) {
        findings.push(FindingKind::DesignationDescriptionMissing.into());
    }

    findings
}

/// Name and designation carry 40 points each, the designation description 20.
pub fn officer_progress(officer: &OfficerFormData) -> f64 {
    [
        (&officer.officer_name, NAME_WEIGHT),
        (&officer.position, POSITION_WEIGHT),
        (&officer.position_description, DESCRIPTION_WEIGHT),
    ]
    .into_iter()
    .filter(|(value, _)| !is_blank(value))
    .map(|(_, weight)| weight)
    .sum()
}
