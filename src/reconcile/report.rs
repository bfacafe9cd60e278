//! Structured discrepancy report.

use serde::{Deserialize, Serialize};

/// Everything a reconciliation run found, built once per run and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    /// Subjects of urgent emails with no matching card.
    pub(crate) missing_cards: Vec<String>,
    /// Subjects of urgent emails whose card lacks the "Urgent" label.
    pub(crate) missing_labels: Vec<String>,
    /// Merge-integrity problems, one message per offending card.
    pub(crate) merge_issues: Vec<String>,
}

impl DiscrepancyReport {
    /// Subjects of urgent emails with no matching card.
    pub fn missing_cards(&self) -> &[String] {
        &self.missing_cards
    }

    /// Subjects of urgent emails whose card lacks the "Urgent" label.
    pub fn missing_labels(&self) -> &[String] {
        &self.missing_labels
    }

    /// Merge-integrity problem messages.
    pub fn merge_issues(&self) -> &[String] {
        &self.merge_issues
    }

    /// True when the run found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.missing_cards.is_empty()
            && self.missing_labels.is_empty()
            && self.merge_issues.is_empty()
    }

    /// Renders every finding as one human-readable line, in report order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(
            self.missing_cards.len() + self.missing_labels.len() + self.merge_issues.len(),
        );
        for subject in &self.missing_cards {
            lines.push(format!("missing card for urgent email: {subject}"));
        }
        for subject in &self.missing_labels {
            lines.push(format!(
                "card for urgent email '{subject}' lacks the Urgent label"
            ));
        }
        lines.extend(self.merge_issues.iter().cloned());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report_is_clean() {
        assert!(DiscrepancyReport::default().is_clean());
        assert!(DiscrepancyReport::default().lines().is_empty());
    }

    #[test]
    fn any_finding_makes_report_dirty() {
        let report = DiscrepancyReport {
            missing_cards: vec!["Task A".to_string()],
            ..Default::default()
        };
        assert!(!report.is_clean());

        let report = DiscrepancyReport {
            merge_issues: vec!["card 'X' is missing a merged email body".to_string()],
            ..Default::default()
        };
        assert!(!report.is_clean());
    }

    #[test]
    fn lines_render_all_sections_in_order() {
        let report = DiscrepancyReport {
            missing_cards: vec!["Task A".to_string()],
            missing_labels: vec!["Task B".to_string()],
            merge_issues: vec!["card 'X' is missing a merged email body".to_string()],
        };
        assert_eq!(
            report.lines(),
            vec![
                "missing card for urgent email: Task A",
                "card for urgent email 'Task B' lacks the Urgent label",
                "card 'X' is missing a merged email body",
            ]
        );
    }

    #[test]
    fn report_serializes() {
        let report = DiscrepancyReport {
            missing_cards: vec!["Task A".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: DiscrepancyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
