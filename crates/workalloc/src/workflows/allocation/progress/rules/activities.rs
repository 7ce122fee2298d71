use super::super::config::EmptySectionPolicy;
use super::super::findings::{Finding, FindingKind};
use super::FieldTally;
use crate::workflows::allocation::domain::{is_blank, split_unmapped, ActivityGroup};

pub fn activity_findings(groups: &[ActivityGroup]) -> Vec<Finding> {
    let (unmapped, roles) = split_unmapped(groups);
    let mut findings = Vec::new();

    if unmapped.is_some_and(|bucket| !bucket.activities.is_empty()) {
        findings.push(FindingKind::UnmappedActivities.into());
    }

    for role in roles {
        if is_blank(&role.group_name) {
            findings.push(FindingKind::RoleLabelMissing.into());
        }
        if is_blank(&role.group_description) {
            findings.push(FindingKind::RoleDescriptionMissing.into());
        }

        for activity in &role.activities {
            if is_blank(&activity.activity_description) {
                findings.push(FindingKind::ActivityDescriptionMissing.into());
            }
            if is_blank(&activity.assigned_to) {
                findings.push(FindingKind::SubmitToMissing.into());
            }
        }
    }

    findings
}

/// Share of role labels, role descriptions, activity descriptions and
/// assignees that are filled in across the named roles.
pub fn activity_progress(groups: &[ActivityGroup], policy: EmptySectionPolicy) -> f64 {
    let (unmapped, roles) = split_unmapped(groups);
    let mut tally = FieldTally::default();

    for role in roles {
        tally.record(!is_blank(&role.group_name));
        tally.record(!is_blank(&role.group_description));
        for activity in &role.activities {
            tally.record(!is_blank(&activity.activity_description));
            tally.record(!is_blank(&activity.assigned_to));
        }
    }

    let waiting = unmapped.map_or(0, |bucket| bucket.activities.len());
    tally.resolve(waiting, policy)
}
