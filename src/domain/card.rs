//! Board card domain type.

use serde::{Deserialize, Serialize};

/// A card on the task board, as reported by the board API.
///
/// Labels preserve the source order and casing and may contain duplicates;
/// membership checks go through [`Card::has_label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Board-assigned card ID.
    pub id: String,
    /// Card title as shown on the board.
    pub name: String,
    /// Free-form description text.
    pub description: String,
    /// Label names attached to the card.
    pub labels: Vec<String>,
}

impl Card {
    /// Creates a new card.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            labels,
        }
    }

    /// Case-insensitive label membership check.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(name))
    }
}
