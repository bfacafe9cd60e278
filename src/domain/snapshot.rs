//! Card snapshot taken from a live card dialog.

use serde::{Deserialize, Serialize};

use super::Status;

/// The fields extracted from one card dialog at one point in time.
///
/// Snapshots are ephemeral: built fresh each time a dialog is opened,
/// consumed by reconciliation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// Card title.
    pub title: String,
    /// Label names in first-seen order, deduped, no empty entries.
    pub labels: Vec<String>,
    /// Description text, empty when the card has none.
    pub description: String,
    /// Inferred workflow status.
    pub status: Status,
}

impl CardSnapshot {
    /// Builds a snapshot, dropping empty labels and case-sensitive duplicates
    /// while preserving first-seen order.
    pub fn new(
        title: impl Into<String>,
        labels: impl IntoIterator<Item = String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        let mut deduped: Vec<String> = Vec::new();
        for label in labels {
            if !label.is_empty() && !deduped.contains(&label) {
                deduped.push(label);
            }
        }
        Self {
            title: title.into(),
            labels: deduped,
            description: description.into(),
            status,
        }
    }

    /// Case-insensitive label membership check, mirroring [`super::Card::has_label`].
    pub fn has_label(&self, name: &str) -> bool {
        self.labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(name))
    }
}
