use serde::{Deserialize, Serialize};

/// Officer section of a work-allocation document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficerFormData {
    pub officer_name: String,
    pub position: String,
    pub position_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub activity_description: String,
    pub assigned_to: String,
}

/// A role and the activities assigned to it.
///
/// Position 0 of a group list is the unmapped bucket; its name and
/// description are never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityGroup {
    pub group_name: String,
    pub group_description: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Competency {
    pub comp_name: String,
    pub comp_description: String,
}

/// Competencies grouped under a role; position 0 is the unmapped bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetencyGroup {
    pub competencies: Vec<Competency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetencyDetail {
    pub comp_level: String,
    pub comp_type: String,
    pub comp_area: String,
}

/// In-progress work-allocation document assembled from the four form sections.
///
/// A `None` section has not been provided by its form yet and scores zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkAllocationDraft {
    pub officer: Option<OfficerFormData>,
    pub activity_groups: Option<Vec<ActivityGroup>>,
    pub competency_groups: Option<Vec<CompetencyGroup>>,
    pub competency_details: Option<Vec<CompetencyDetail>>,
}

/// Empty or whitespace-only form input.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Splits a group list into its unmapped bucket and the named groups after it.
pub(crate) fn split_unmapped<T>(groups: &[T]) -> (Option<&T>, &[T]) {
    match groups.split_first() {
        Some((unmapped, named)) => (Some(unmapped), named),
        None => (None, &[]),
    }
}
