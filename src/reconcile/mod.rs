//! Reconciliation between the inbox and the board.
//!
//! Pure, stateless diffing over already-collected [`Email`] and [`Card`]
//! collections. Findings are data, not errors: both checks run to
//! completion and accumulate everything they see before returning.

mod report;

pub use report::DiscrepancyReport;

use std::collections::{HashMap, HashSet};

use crate::domain::{Card, Email};

/// Label every urgent email's card must carry.
const URGENT_LABEL: &str = "Urgent";

/// Subject prefix stripped when deriving a card title from an email subject.
const TASK_PREFIX: &str = "Task: ";

/// Diffs the inbox against the board, reporting urgent-label drift and
/// duplicate-subject merge problems.
///
/// Matching is exact and case-sensitive on `card.name == email.subject`.
/// That strictness is inherited behavior; it may mask matches differing
/// only in case, and is deliberately left unchanged rather than silently
/// loosened.
pub fn reconcile(emails: &[Email], cards: &[Card]) -> DiscrepancyReport {
    let index = index_by_name(cards);
    let mut report = DiscrepancyReport::default();
    check_urgent_label_drift(emails, &index, &mut report);
    check_merge_integrity(emails, &index, &mut report);
    report
}

/// Builds a name → card index; the first card with a given name wins, which
/// keeps lookups stable under duplicate names.
fn index_by_name<'a>(cards: &'a [Card]) -> HashMap<&'a str, &'a Card> {
    let mut index = HashMap::with_capacity(cards.len());
    for card in cards {
        index.entry(card.name.as_str()).or_insert(card);
    }
    index
}

/// Every urgent email must have a card named after its subject, and that
/// card must carry the "Urgent" label. A satisfied email produces no entry.
fn check_urgent_label_drift(
    emails: &[Email],
    index: &HashMap<&str, &Card>,
    report: &mut DiscrepancyReport,
) {
    for email in emails.iter().filter(|email| email.is_urgent()) {
        match index.get(email.subject.as_str()) {
            None => report.missing_cards.push(email.subject.clone()),
            Some(card) if !card.has_label(URGENT_LABEL) => {
                report.missing_labels.push(email.subject.clone());
            }
            Some(_) => {}
        }
    }
}

/// Duplicate emails under one subject are expected to have been merged into
/// a single card whose description contains every distinct body. The first
/// body missing from the description yields one issue for that card and
/// ends the group's check.
fn check_merge_integrity(
    emails: &[Email],
    index: &HashMap<&str, &Card>,
    report: &mut DiscrepancyReport,
) {
    for (subject, group) in group_by_subject(emails) {
        if group.len() <= 1 {
            continue;
        }
        let distinct_bodies: Vec<&str> = distinct_trimmed_bodies(&group);
        if distinct_bodies.len() <= 1 {
            continue;
        }
        let expected_title = subject.strip_prefix(TASK_PREFIX).unwrap_or(subject);
        let Some(card) = index.get(expected_title) else {
            continue;
        };
        for body in distinct_bodies {
            if !card.description.contains(body) {
                report
                    .merge_issues
                    .push(format!("card '{expected_title}' is missing a merged email body"));
                break;
            }
        }
    }
}

/// Groups emails by subject, preserving first-seen subject order and
/// within-group email order.
fn group_by_subject(emails: &[Email]) -> Vec<(&str, Vec<&Email>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Email>> = HashMap::new();
    for email in emails {
        let subject = email.subject.as_str();
        groups
            .entry(subject)
            .or_insert_with(|| {
                order.push(subject);
                Vec::new()
            })
            .push(email);
    }
    order
        .into_iter()
        .map(|subject| (subject, groups.remove(subject).unwrap_or_default()))
        .collect()
}

/// The distinct non-empty trimmed bodies in a group, in first-seen order.
fn distinct_trimmed_bodies<'a>(group: &[&'a Email]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut bodies = Vec::new();
    for email in group {
        let body = email.body.trim();
        if !body.is_empty() && seen.insert(body) {
            bodies.push(body);
        }
    }
    bodies
}
