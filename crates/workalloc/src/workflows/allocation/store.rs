use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

use super::progress::{FindingsBySeverity, ProgressReport, SectionScores};

/// Outbound hook receiving every recomputed report.
pub trait ProgressPublisher: Send + Sync {
    fn publish(&self, report: &ProgressReport) -> Result<(), PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("progress publisher unavailable: {0}")]
    Unavailable(String),
}

/// What sibling views read: the latest percentage and the badge buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Zero until the first publish.
    pub revision: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub percentage: u8,
    pub sections: SectionScores,
    pub error_count: usize,
    pub warning_count: usize,
    pub findings: FindingsBySeverity,
}

impl ProgressSnapshot {
    fn from_report(report: &ProgressReport, revision: u64) -> Self {
        let findings = report.by_severity();
        Self {
            revision,
            published_at: Some(Utc::now()),
            percentage: report.percentage,
            sections: report.sections,
            error_count: findings.error_count(),
            warning_count: findings.warning_count(),
            findings,
        }
    }
}

/// Single-writer progress channel; each publish replaces the previous snapshot.
#[derive(Debug)]
pub struct ProgressStore {
    sender: watch::Sender<ProgressSnapshot>,
}

impl ProgressStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ProgressSnapshot::default());
        Self { sender }
    }

    pub fn latest(&self) -> ProgressSnapshot {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.sender.subscribe()
    }

    /// Drop findings and percentage while keeping revisions increasing.
    pub fn reset(&self) {
        self.sender.send_modify(|snapshot| {
            *snapshot = ProgressSnapshot {
                revision: snapshot.revision + 1,
                ..ProgressSnapshot::default()
            };
        });
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressPublisher for ProgressStore {
    fn publish(&self, report: &ProgressReport) -> Result<(), PublishError> {
        self.sender.send_modify(|snapshot| {
            *snapshot = ProgressSnapshot::from_report(report, snapshot.revision + 1);
        });
        Ok(())
    }
}
