use super::common::*;
use crate::workflows::allocation::domain::WorkAllocationDraft;
use crate::workflows::allocation::progress::{
    EmptySectionPolicy, FindingKind, ProgressEngine, ScoringConfig, Section, SectionScores,
    SectionWeights,
};

#[test]
fn complete_draft_scores_one_hundred_without_findings() {
    let report = engine().evaluate(&complete_draft());

    assert_eq!(report.percentage, 100);
    assert!(report.findings.is_empty());
    assert_eq!(
        report.sections,
        SectionScores {
            officer: 100.0,
            activities: 100.0,
            competencies: 100.0,
            competency_details: 100.0,
        }
    );
}

#[test]
fn missing_sections_score_zero_and_flag_officer_fields() {
    let report = engine().evaluate(&WorkAllocationDraft::default());

    assert_eq!(report.percentage, 0);
    assert_eq!(report.sections, SectionScores::default());
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.warning_count(), 1);
    assert!(report
        .findings
        .iter()
        .all(|finding| finding.kind.section() == Section::Officer));
}

#[test]
fn missing_sections_score_zero_even_when_empty_sections_are_not_applicable() {
    let engine = ProgressEngine::new(ScoringConfig {
        weights: SectionWeights::STANDARD,
        empty_section: EmptySectionPolicy::NotApplicable,
    });
    let mut draft = complete_draft();
    draft.competency_details = None;
    draft.competency_groups = Some(Vec::new());

    let report = engine.evaluate(&draft);

    assert_eq!(report.sections.competency_details, 0.0);
    assert_eq!(report.sections.competencies, 100.0);
    assert_eq!(report.percentage, 90);
}

#[test]
fn worked_example_combines_sections_with_standard_weights() {
    // activities: 2 role fields + 3 activities x 2 fields = 8 expected, 2 assignees missing -> 75
    // competencies: 2 competencies x 2 fields, 1 description missing -> 75
    let mut draft = complete_draft();
    draft.activity_groups = Some(vec![
        unmapped_activities(Vec::new()),
        role(
            "Establishment",
            "Service matters",
            vec![
                activity("Process leave", "Deputy Secretary"),
                activity("Update seniority list", ""),
                activity("Maintain service books", ""),
            ],
        ),
    ]);
    draft.competency_groups = Some(vec![
        competency_group(Vec::new()),
        competency_group(vec![
            competency("Noting", "Prepares notes"),
            competency("Drafting", ""),
        ]),
    ]);

    let report = engine().evaluate(&draft);

    assert_eq!(report.sections.activities, 75.0);
    assert_eq!(report.sections.competencies, 75.0);
    // ceil(10 + 45 + 15 + 10)
    assert_eq!(report.percentage, 80);
    assert_eq!(
        labels(&report.findings),
        vec![
            "Submit to is missing",
            "Submit to is missing",
            "Competency description missing"
        ]
    );
}

#[test]
fn eighty_percent_activities_matches_reference_percentage() {
    // 2 role fields + 4 activities x 2 fields = 10 expected; 8 filled -> 80
    let mut draft = complete_draft();
    draft.activity_groups = Some(vec![
        unmapped_activities(Vec::new()),
        role(
            "Coordination",
            "Inter-ministerial references",
            vec![
                activity("Track references", "Director"),
                activity("Reply to reminders", ""),
                activity("Weekly status note", "Director"),
                activity("", "Director"),
            ],
        ),
    ]);
    draft.competency_groups = Some(vec![
        competency_group(Vec::new()),
        competency_group(vec![
            competency("Noting", "Prepares notes"),
            competency("Drafting", ""),
        ]),
    ]);

    let report = engine().evaluate(&draft);

    assert_eq!(report.sections.activities, 80.0);
    assert_eq!(report.sections.competencies, 75.0);
    assert_eq!(report.percentage, 83);
}

#[test]
fn findings_follow_section_order() {
    let mut draft = complete_draft();
    draft.officer = Some(Default::default());
    draft.activity_groups = Some(vec![unmapped_activities(vec![activity("Loose", "")])]);
    draft.competency_groups = Some(vec![competency_group(vec![competency("Loose", "")])]);
    draft.competency_details = Some(vec![detail("", "Functional", "Finance")]);

    let report = engine().evaluate(&draft);
    let sections: Vec<Section> = report
        .findings
        .iter()
        .map(|finding| finding.kind.section())
        .collect();

    let mut sorted = sections.clone();
    sorted.sort_by_key(|section| {
        Section::ordered()
            .iter()
            .position(|candidate| candidate == section)
    });
    assert_eq!(sections, sorted);
    assert!(report
        .findings
        .iter()
        .any(|finding| finding.kind == FindingKind::UnmappedActivities));
    assert!(report
        .findings
        .iter()
        .any(|finding| finding.kind == FindingKind::UnmappedCompetencies));
}

#[test]
fn evaluation_is_idempotent() {
    let mut draft = complete_draft();
    draft.officer = Some(Default::default());
    let engine = engine();

    let first = engine.evaluate(&draft);
    let second = engine.evaluate(&draft);

    assert_eq!(first, second);
    assert_eq!(first.view(), second.view());
}

#[test]
fn overall_never_decreases_as_a_section_improves() {
    let weights = SectionWeights::STANDARD;
    let base = SectionScores {
        officer: 40.0,
        activities: 55.0,
        competencies: 20.0,
        competency_details: 70.0,
    };

    for section in Section::ordered() {
        let mut previous = weights.overall(&base);
        for step in 0..=100 {
            let mut scores = base;
            let value = f64::from(step);
            match section {
                Section::Officer => scores.officer = value,
                Section::Activities => scores.activities = value,
                Section::Competencies => scores.competencies = value,
                Section::CompetencyDetails => scores.competency_details = value,
            }
            let overall = weights.overall(&scores);
            if step > 0 {
                assert!(
                    overall >= previous,
                    "{section:?} step {step}: {overall} < {previous}"
                );
            }
            previous = overall;
        }
    }
}

#[test]
fn view_partitions_findings_with_counts() {
    let mut draft = complete_draft();
    draft.officer = Some(Default::default());

    let view = engine().evaluate(&draft).view();

    assert_eq!(view.error_count, 2);
    assert_eq!(view.warning_count, 1);
    assert_eq!(view.errors.len(), 2);
    assert_eq!(view.warnings[0].kind, FindingKind::DesignationDescriptionMissing);
    assert_eq!(view.percentage, 90);
}
