//! Integration tests for the reconciliation pipeline.
//!
//! These tests exercise the public API across module boundaries: domain
//! predicates feeding the reconciliation engine, and the report rendering
//! the CLI prints. Extraction internals are covered by unit tests against
//! the fake page driver inside the crate.

use boardsync::domain::{Card, CardSnapshot, Email, Status};
use boardsync::extract::{collapse_whitespace, normalize_label};
use boardsync::reconcile;

fn card(name: &str, labels: &[&str]) -> Card {
    Card::new(
        "card-1",
        name,
        "",
        labels.iter().map(|s| s.to_string()).collect(),
    )
}

// ============================================================================
// Urgent-label drift
// ============================================================================

#[test]
fn urgent_email_without_card_is_reported_missing() {
    let emails = [Email::new("Task A", "please handle, urgent")];
    let report = reconcile(&emails, &[]);

    assert_eq!(report.missing_cards(), ["Task A"]);
    assert!(report.missing_labels().is_empty());
    assert!(!report.is_clean());
}

#[test]
fn urgent_email_with_unlabeled_card_is_reported() {
    let emails = [Email::new("Task A", "urgent")];
    let cards = [card("Task A", &[])];
    let report = reconcile(&emails, &cards);

    assert!(report.missing_cards().is_empty());
    assert_eq!(report.missing_labels(), ["Task A"]);
}

#[test]
fn labeled_card_satisfies_urgent_email() {
    let emails = [Email::new("Task A", "urgent")];
    let cards = [card("Task A", &["Urgent"])];

    assert!(reconcile(&emails, &cards).is_clean());
}

#[test]
fn drift_report_renders_one_line_per_finding() {
    let emails = [
        Email::new("Task A", "urgent"),
        Email::new("Task B", "also urgent"),
    ];
    let cards = [card("Task B", &["New"])];
    let report = reconcile(&emails, &cards);

    let lines = report.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Task A"));
    assert!(lines[1].contains("Task B"));
}

// ============================================================================
// Merge integrity
// ============================================================================

#[test]
fn merged_card_containing_all_bodies_passes() {
    let emails = [
        Email::new("Task: X", "b1"),
        Email::new("Task: X", "b2"),
    ];
    let cards = [Card::new("c", "X", "b1 and b2 together", vec![])];

    assert!(reconcile(&emails, &cards).is_clean());
}

#[test]
fn merged_card_missing_a_body_yields_exactly_one_issue() {
    let emails = [
        Email::new("Task: X", "b1"),
        Email::new("Task: X", "b2"),
    ];
    let cards = [Card::new("c", "X", "b1 only", vec![])];
    let report = reconcile(&emails, &cards);

    assert_eq!(report.merge_issues().len(), 1);
    assert!(report.merge_issues()[0].contains("'X'"));
}

// ============================================================================
// Domain types
// ============================================================================

#[test]
fn urgency_is_a_body_predicate() {
    assert!(Email::new("anything", "URGENT: now").is_urgent());
    assert!(!Email::new("Urgent subject", "calm body").is_urgent());
}

#[test]
fn snapshot_builder_enforces_label_invariants() {
    let snapshot = CardSnapshot::new(
        "Task A",
        vec![
            "Urgent".to_string(),
            String::new(),
            "Urgent".to_string(),
            "New".to_string(),
        ],
        "desc",
        Status::InProgress,
    );

    assert_eq!(snapshot.labels, vec!["Urgent", "New"]);
    assert!(snapshot.has_label("urgent"));
}

#[test]
fn status_labels_round_trip() {
    for status in Status::KNOWN {
        assert_eq!(Status::from_exact(status.label()), Some(status));
    }
    assert_eq!(Status::from_exact("Unknown"), None);
}

// ============================================================================
// Extraction text utilities
// ============================================================================

#[test]
fn label_normalization_strips_every_quote_variant() {
    for raw in [
        "Color: red, title:\"Urgent\"",
        "Color: red, title:'Urgent'",
        "Color: red, title:\u{201C}Urgent\u{201D}",
        "Color: red, title:\u{2018}Urgent\u{2019}",
    ] {
        assert_eq!(normalize_label(raw), "Urgent");
    }
}

#[test]
fn label_normalization_without_marker_is_empty() {
    assert_eq!(normalize_label("Color: red"), "");
}

#[test]
fn whitespace_collapse_produces_single_spaced_text() {
    assert_eq!(
        collapse_whitespace("line one\n\tline\ttwo\r\n  end  "),
        "line one line two end"
    );
}
