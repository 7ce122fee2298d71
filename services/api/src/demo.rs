use crate::infra::allocation_state;
use chrono::SecondsFormat;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::watch;
use workalloc::config::AppConfig;
use workalloc::error::AppError;
use workalloc::workflows::allocation::{
    export_findings_csv, section_summary, Activity, ActivityGroup, AllocationState, Competency,
    CompetencyDetail, CompetencyGroup, DocumentError, DraftFeeds, EditingSession, Finding,
    OfficerFormData, ProgressEngine, ProgressReport, ProgressSnapshot, WorkAllocationDraft,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Work-allocation draft as JSON
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each published snapshot as a JSON line instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let draft = WorkAllocationDraft::from_path(&args.input)?;
    let report = ProgressEngine::new(config.scoring).evaluate(&draft);

    match args.format {
        OutputFormat::Text => render_progress_report(&report),
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&report.view()).map_err(DocumentError::from)?;
            println!("{body}");
        }
        OutputFormat::Csv => export_findings_csv(&report, io::stdout().lock())?,
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct DemoStepOutput<'a> {
    step: &'static str,
    snapshot: &'a ProgressSnapshot,
}

type DemoEdit = fn(&DraftFeeds);

fn demo_script() -> Vec<(&'static str, DemoEdit)> {
    vec![
        ("Officer details entered", enter_officer as DemoEdit),
        ("Establishment role drafted", draft_establishment_role as DemoEdit),
        ("Competencies mapped", map_competencies as DemoEdit),
        ("Competency details recorded", record_competency_details as DemoEdit),
        ("Descriptions completed", complete_descriptions as DemoEdit),
    ]
}

fn enter_officer(feeds: &DraftFeeds) {
    feeds.set_officer(Some(OfficerFormData {
        officer_name: "Meera Nair".to_string(),
        position: "Under Secretary".to_string(),
        position_description: String::new(),
    }));
}

fn draft_establishment_role(feeds: &DraftFeeds) {
    feeds.set_activity_groups(Some(vec![
        ActivityGroup {
            activities: vec![activity("Weed out old files", "")],
            ..ActivityGroup::default()
        },
        ActivityGroup {
            group_name: "Establishment".to_string(),
            group_description: String::new(),
            activities: vec![
                activity("Process leave applications", "Deputy Secretary"),
                activity("Maintain service books", ""),
            ],
        },
    ]));
}

fn map_competencies(feeds: &DraftFeeds) {
    feeds.set_competency_groups(Some(vec![
        CompetencyGroup::default(),
        CompetencyGroup {
            competencies: vec![
                competency("Noting", "Prepares notes on files"),
                competency("Drafting", ""),
            ],
        },
    ]));
}

fn record_competency_details(feeds: &DraftFeeds) {
    feeds.set_competency_details(Some(vec![CompetencyDetail {
        comp_level: "3".to_string(),
        comp_type: "Functional".to_string(),
        comp_area: "Administration".to_string(),
    }]));
}

/// Fill every blank left by the earlier steps and map the loose activity away.
fn complete_descriptions(feeds: &DraftFeeds) {
    let mut draft = feeds.draft();
    if let Some(officer) = draft.officer.as_mut() {
        officer.position_description = "Heads the establishment section".to_string();
    }
    if let Some(groups) = draft.activity_groups.as_mut() {
        if let Some(bucket) = groups.first_mut() {
            bucket.activities.clear();
        }
        for role in groups.iter_mut().skip(1) {
            role.group_description = "Service matters of section staff".to_string();
            for entry in &mut role.activities {
                if entry.assigned_to.is_empty() {
                    entry.assigned_to = "Section Officer".to_string();
                }
            }
        }
    }
    if let Some(groups) = draft.competency_groups.as_mut() {
        for entry in groups.iter_mut().flat_map(|group| &mut group.competencies) {
            if entry.comp_description.is_empty() {
                entry.comp_description = "Prepares draft replies".to_string();
            }
        }
    }
    feeds.replace(draft);
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let state = allocation_state(config.scoring);
    let mut receiver = state.store.subscribe();
    let session = EditingSession::start(&state.feeds, state.engine.clone(), state.store.clone());

    if !args.json {
        println!("Work-allocation editing demo");
    }
    let replayed = replay(&state, &mut receiver, args.json).await;

    session.shutdown().await;
    replayed
}

async fn replay(
    state: &AllocationState,
    receiver: &mut watch::Receiver<ProgressSnapshot>,
    json: bool,
) -> Result<(), AppError> {
    let initial = state.engine.evaluate(&state.feeds.draft());
    let snapshot = settled_snapshot(receiver, &initial).await?;
    print_step("Blank draft opened", &snapshot, json)?;

    for (step, edit) in demo_script() {
        edit(&state.feeds);
        let expected = state.engine.evaluate(&state.feeds.draft());
        let snapshot = settled_snapshot(receiver, &expected).await?;
        print_step(step, &snapshot, json)?;
    }
    Ok(())
}

/// Wait until the store reflects `expected`; intermediate publishes are skipped.
async fn settled_snapshot(
    receiver: &mut watch::Receiver<ProgressSnapshot>,
    expected: &ProgressReport,
) -> Result<ProgressSnapshot, AppError> {
    let wait = async {
        loop {
            {
                let snapshot = receiver.borrow_and_update();
                if snapshot.revision > 0
                    && snapshot.percentage == expected.percentage
                    && snapshot.sections == expected.sections
                    && snapshot.error_count == expected.error_count()
                    && snapshot.warning_count == expected.warning_count()
                {
                    return Ok(snapshot.clone());
                }
            }
            if receiver.changed().await.is_err() {
                let closed = io::Error::new(io::ErrorKind::BrokenPipe, "progress store closed");
                return Err(AppError::from(closed));
            }
        }
    };

    match tokio::time::timeout(Duration::from_secs(5), wait).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(io::ErrorKind::TimedOut, "no progress published").into()),
    }
}

fn print_step(step: &'static str, snapshot: &ProgressSnapshot, json: bool) -> Result<(), AppError> {
    if json {
        let line = serde_json::to_string(&DemoStepOutput { step, snapshot })
            .map_err(DocumentError::from)?;
        println!("{line}");
        return Ok(());
    }

    let published = snapshot
        .published_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| "never".to_string());
    println!(
        "\n{step}: {}% complete (revision {}, published {published})",
        snapshot.percentage, snapshot.revision
    );
    println!(
        "  {} error(s), {} warning(s)",
        snapshot.error_count, snapshot.warning_count
    );
    print_findings("Errors", &snapshot.findings.errors);
    print_findings("Warnings", &snapshot.findings.warnings);
    Ok(())
}

fn render_progress_report(report: &ProgressReport) {
    println!("Work-allocation progress: {}%", report.percentage);
    println!("Sections:");
    for (section, score, findings) in section_summary(report) {
        println!(
            "  - {}: {:.0}% ({} finding(s))",
            section.label(),
            score,
            findings
        );
    }

    let buckets = report.by_severity();
    print_findings("Errors", &buckets.errors);
    print_findings("Warnings", &buckets.warnings);
}

fn print_findings(title: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    println!("  {title}:");
    for finding in findings {
        println!("    - {} ({})", finding.label, finding.kind.section().label());
    }
}

fn activity(description: &str, assigned_to: &str) -> Activity {
    Activity {
        activity_description: description.to_string(),
        assigned_to: assigned_to.to_string(),
    }
}

fn competency(name: &str, description: &str) -> Competency {
    Competency {
        comp_name: name.to_string(),
        comp_description: description.to_string(),
    }
}
