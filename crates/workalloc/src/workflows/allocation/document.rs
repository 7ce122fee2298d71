use std::io::{Read, Write};
use std::path::Path;

use super::domain::WorkAllocationDraft;
use super::progress::{ProgressReport, Section};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read work-allocation draft: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid work-allocation draft: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to export findings: {0}")]
    Export(#[from] csv::Error),
}

impl WorkAllocationDraft {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[derive(Debug, serde::Serialize)]
struct FindingRow<'a> {
    section: &'a str,
    severity: &'a str,
    label: &'a str,
}

/// Write one `section,severity,label` row per finding, in report order.
pub fn export_findings_csv<W: Write>(report: &ProgressReport, writer: W) -> Result<(), DocumentError> {
    let mut csv = csv::Writer::from_writer(writer);
    for finding in &report.findings {
        csv.serialize(FindingRow {
            section: finding.kind.section().label(),
            severity: finding.severity.label(),
            label: finding.label,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Per-section totals used by the text renderers.
pub fn section_summary(report: &ProgressReport) -> Vec<(Section, f64, usize)> {
    Section::ordered()
        .into_iter()
        .map(|section| {
            let findings = report
                .findings
                .iter()
                .filter(|finding| finding.kind.section() == section)
                .count();
            (section, report.sections.get(section), findings)
        })
        .collect()
}
