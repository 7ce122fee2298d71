//! Per-section validation rules and partial-completion scores.
//!
//! Every rule reads a blank (empty or whitespace) field as missing. Group
//! lists reserve position 0 for the unmapped bucket, which only feeds the
//! "unmapped items exist" checks.

mod activities;
mod competencies;
mod details;
mod officer;

pub use activities::{activity_findings, activity_progress};
pub use competencies::{competency_findings, competency_progress};
pub use details::{competency_detail_findings, competency_detail_progress};
pub use officer::{officer_findings, officer_progress};

use super::config::EmptySectionPolicy;

/// Counts filled fields against the fields a section expects.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FieldTally {
    filled: usize,
    expected: usize,
}

impl FieldTally {
    pub(crate) fn record(&mut self, filled: bool) {
        self.expected += 1;
        if filled {
            self.filled += 1;
        }
    }

    /// `None` when the section expected nothing at all.
    pub(crate) fn percentage(&self) -> Option<f64> {
        if self.expected == 0 {
            None
        } else {
            Some(self.filled as f64 * 100.0 / self.expected as f64)
        }
    }

    /// Falls back to the empty-section policy unless unmapped items are waiting.
    pub(crate) fn resolve(&self, unmapped_items: usize, policy: EmptySectionPolicy) -> f64 {
        match self.percentage() {
            Some(percentage) => percentage,
            None if unmapped_items > 0 => 0.0,
            None => policy.score(),
        }
    }
}
