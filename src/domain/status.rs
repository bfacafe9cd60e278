//! Workflow status of a board card.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate texts longer than this never fuzzy-match a status label.
const FUZZY_MATCH_MAX_LEN: usize = 50;

/// The workflow state a card occupies on the board.
///
/// `Unknown` is a legitimate terminal value produced when none of the
/// inference tiers could place the card, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Card sits in the "To Do" column.
    ToDo,
    /// Card sits in the "In Progress" column.
    InProgress,
    /// Card sits in the "Done" column.
    Done,
    /// Column could not be determined.
    Unknown,
}

impl Status {
    /// The three statuses a board column can actually carry.
    pub const KNOWN: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

    /// The column header text for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
            Status::Unknown => "Unknown",
        }
    }

    /// Parses a text that exactly equals one of the known column labels.
    pub fn from_exact(text: &str) -> Option<Status> {
        Self::KNOWN
            .iter()
            .copied()
            .find(|status| status.label() == text)
    }

    /// Matches a candidate text against the known statuses.
    ///
    /// A candidate matches when it equals a column label exactly, or when it
    /// contains the label and is itself short. The length gate keeps a long
    /// unrelated paragraph that happens to mention "To Do" from matching.
    pub fn from_candidate(text: &str) -> Option<Status> {
        Self::KNOWN.iter().copied().find(|status| {
            let label = status.label();
            text == label || (text.contains(label) && text.chars().count() < FUZZY_MATCH_MAX_LEN)
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
