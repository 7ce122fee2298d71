use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;
use tokio::sync::watch;

use crate::workflows::allocation::domain::{
    Activity, ActivityGroup, Competency, CompetencyDetail, CompetencyGroup, OfficerFormData,
    WorkAllocationDraft,
};
use crate::workflows::allocation::progress::{Finding, ProgressEngine, ProgressReport};
use crate::workflows::allocation::router::AllocationState;
use crate::workflows::allocation::session::DraftFeeds;
use crate::workflows::allocation::store::{
    ProgressPublisher, ProgressSnapshot, ProgressStore, PublishError,
};

pub(super) fn officer() -> OfficerFormData {
    OfficerFormData {
        officer_name: "Meera Nair".to_string(),
        position: "Under Secretary".to_string(),
        position_description: "Heads the establishment section".to_string(),
    }
}

pub(super) fn activity(description: &str, assigned_to: &str) -> Activity {
    Activity {
        activity_description: description.to_string(),
        assigned_to: assigned_to.to_string(),
    }
}

pub(super) fn role(name: &str, description: &str, activities: Vec<Activity>) -> ActivityGroup {
    ActivityGroup {
        group_name: name.to_string(),
        group_description: description.to_string(),
        activities,
    }
}

pub(super) fn unmapped_activities(activities: Vec<Activity>) -> ActivityGroup {
    role("", "", activities)
}

pub(super) fn competency(name: &str, description: &str) -> Competency {
    Competency {
        comp_name: name.to_string(),
        comp_description: description.to_string(),
    }
}

pub(super) fn competency_group(competencies: Vec<Competency>) -> CompetencyGroup {
    CompetencyGroup { competencies }
}

pub(super) fn detail(level: &str, kind: &str, area: &str) -> CompetencyDetail {
    CompetencyDetail {
        comp_level: level.to_string(),
        comp_type: kind.to_string(),
        comp_area: area.to_string(),
    }
}

/// A draft with every field filled and nothing left unmapped.
pub(super) fn complete_draft() -> WorkAllocationDraft {
    WorkAllocationDraft {
        officer: Some(officer()),
        activity_groups: Some(vec![
            unmapped_activities(Vec::new()),
            role(
                "Establishment",
                "Service matters of section staff",
                vec![
                    activity("Process leave applications", "Deputy Secretary"),
                    activity("Maintain service books", "Section Officer"),
                ],
            ),
        ]),
        competency_groups: Some(vec![
            competency_group(Vec::new()),
            competency_group(vec![competency(
                "Noting and drafting",
                "Prepares notes on files",
            )]),
        ]),
        competency_details: Some(vec![detail("3", "Functional", "Administration")]),
    }
}

pub(super) fn labels(findings: &[Finding]) -> Vec<&'static str> {
    findings.iter().map(|finding| finding.label).collect()
}

pub(super) fn engine() -> Arc<ProgressEngine> {
    Arc::new(ProgressEngine::default())
}

pub(super) fn allocation_state() -> AllocationState {
    AllocationState {
        engine: engine(),
        feeds: Arc::new(DraftFeeds::new()),
        store: Arc::new(ProgressStore::new()),
    }
}

/// Wait until the store publishes a snapshot matching `predicate`.
pub(super) async fn wait_for<F>(
    receiver: &mut watch::Receiver<ProgressSnapshot>,
    predicate: F,
) -> ProgressSnapshot
where
    F: Fn(&ProgressSnapshot) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let snapshot = receiver.borrow_and_update();
                if predicate(&*snapshot) {
                    return (*snapshot).clone();
                }
            }
            receiver.changed().await.expect("store alive");
        }
    })
    .await
    .expect("snapshot published in time")
}

/// Publisher recording every report it receives.
#[derive(Default)]
pub(super) struct RecordingPublisher {
    reports: Mutex<Vec<ProgressReport>>,
}

impl RecordingPublisher {
    pub(super) fn reports(&self) -> Vec<ProgressReport> {
        self.reports.lock().expect("publisher mutex poisoned").clone()
    }
}

impl ProgressPublisher for RecordingPublisher {
    fn publish(&self, report: &ProgressReport) -> Result<(), PublishError> {
        self.reports
            .lock()
            .expect("publisher mutex poisoned")
            .push(report.clone());
        Ok(())
    }
}

pub(super) struct UnavailablePublisher;

impl ProgressPublisher for UnavailablePublisher {
    fn publish(&self, _report: &ProgressReport) -> Result<(), PublishError> {
        Err(PublishError::Unavailable("badge service offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
