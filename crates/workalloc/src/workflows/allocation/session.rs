//! Live editing session: latest-value fan-in over the four form feeds.
//!
//! Each form section pushes into its own watch channel. The session task
//! rebuilds the whole draft from the newest value of every feed whenever any
//! of them changes, scores it, and hands the report to the publisher. Nothing
//! is accumulated between rounds, so a fresh session over the same feeds
//! publishes exactly what the previous one would have.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::domain::{
    ActivityGroup, CompetencyDetail, CompetencyGroup, OfficerFormData, WorkAllocationDraft,
};
use super::progress::ProgressEngine;
use super::store::ProgressPublisher;

/// Write side of the four form sections.
#[derive(Debug)]
pub struct DraftFeeds {
    officer: watch::Sender<Option<OfficerFormData>>,
    activity_groups: watch::Sender<Option<Vec<ActivityGroup>>>,
    competency_groups: watch::Sender<Option<Vec<CompetencyGroup>>>,
    competency_details: watch::Sender<Option<Vec<CompetencyDetail>>>,
}

impl DraftFeeds {
    pub fn new() -> Self {
        Self {
            officer: watch::channel(None).0,
            activity_groups: watch::channel(None).0,
            competency_groups: watch::channel(None).0,
            competency_details: watch::channel(None).0,
        }
    }

    /// Seed every feed from an existing draft.
    pub fn from_draft(draft: WorkAllocationDraft) -> Self {
        let feeds = Self::new();
        feeds.replace(draft);
        feeds
    }

    pub fn set_officer(&self, officer: Option<OfficerFormData>) {
        self.officer.send_replace(officer);
    }

    pub fn set_activity_groups(&self, groups: Option<Vec<ActivityGroup>>) {
        self.activity_groups.send_replace(groups);
    }

    pub fn set_competency_groups(&self, groups: Option<Vec<CompetencyGroup>>) {
        self.competency_groups.send_replace(groups);
    }

    pub fn set_competency_details(&self, details: Option<Vec<CompetencyDetail>>) {
        self.competency_details.send_replace(details);
    }

    /// Replace all four sections; each feed emits once.
    pub fn replace(&self, draft: WorkAllocationDraft) {
        self.set_officer(draft.officer);
        self.set_activity_groups(draft.activity_groups);
        self.set_competency_groups(draft.competency_groups);
        self.set_competency_details(draft.competency_details);
    }

    /// Current value of every feed.
    pub fn draft(&self) -> WorkAllocationDraft {
        WorkAllocationDraft {
            officer: self.officer.borrow().clone(),
            activity_groups: self.activity_groups.borrow().clone(),
            competency_groups: self.competency_groups.borrow().clone(),
            competency_details: self.competency_details.borrow().clone(),
        }
    }

    pub fn subscribe(&self) -> DraftInputs {
        DraftInputs {
            officer: self.officer.subscribe(),
            activity_groups: self.activity_groups.subscribe(),
            competency_groups: self.competency_groups.subscribe(),
            competency_details: self.competency_details.subscribe(),
        }
    }
}

impl Default for DraftFeeds {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of [`DraftFeeds`], owned by one session.
#[derive(Debug)]
pub struct DraftInputs {
    officer: watch::Receiver<Option<OfficerFormData>>,
    activity_groups: watch::Receiver<Option<Vec<ActivityGroup>>>,
    competency_groups: watch::Receiver<Option<Vec<CompetencyGroup>>>,
    competency_details: watch::Receiver<Option<Vec<CompetencyDetail>>>,
}

impl DraftInputs {
    /// Latest value of every feed, marking all of them as seen.
    pub fn latest(&mut self) -> WorkAllocationDraft {
        WorkAllocationDraft {
            officer: self.officer.borrow_and_update().clone(),
            activity_groups: self.activity_groups.borrow_and_update().clone(),
            competency_groups: self.competency_groups.borrow_and_update().clone(),
            competency_details: self.competency_details.borrow_and_update().clone(),
        }
    }

    /// Wait for any feed to emit. `false` once the feeds have been dropped.
    pub async fn changed(&mut self) -> bool {
        tokio::select! {
            result = self.officer.changed() => result.is_ok(),
            result = self.activity_groups.changed() => result.is_ok(),
            result = self.competency_groups.changed() => result.is_ok(),
            result = self.competency_details.changed() => result.is_ok(),
        }
    }
}

/// Handle to a running scorer task. Dropping it stops the task.
#[derive(Debug)]
pub struct EditingSession {
    handle: Option<JoinHandle<()>>,
}

impl EditingSession {
    /// Spawn the scorer on the current tokio runtime. The first report is
    /// published from the feeds' current values without waiting for an edit.
    pub fn start<P>(feeds: &DraftFeeds, engine: Arc<ProgressEngine>, publisher: Arc<P>) -> Self
    where
        P: ProgressPublisher + ?Sized + 'static,
    {
        let inputs = feeds.subscribe();
        let handle = tokio::spawn(run_session(inputs, engine, publisher));
        info!("work-allocation editing session started");
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the task and wait until it can no longer publish.
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            // Cancellation is the expected outcome here.
            let _ = handle.await;
        }
        info!("work-allocation editing session stopped");
    }
}

impl Drop for EditingSession {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn run_session<P>(mut inputs: DraftInputs, engine: Arc<ProgressEngine>, publisher: Arc<P>)
where
    P: ProgressPublisher + ?Sized,
{
    loop {
        let draft = inputs.latest();
        let report = engine.evaluate(&draft);
        debug!(
            percentage = report.percentage,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "recomputed work-allocation progress"
        );

        if let Err(err) = publisher.publish(&report) {
            warn!(error = %err, "failed to publish work-allocation progress");
        }

        if !inputs.changed().await {
            debug!("draft feeds closed");
            break;
        }
    }
}
