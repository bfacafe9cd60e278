//! Email domain type.
//!
//! Represents a single inbox message as supplied by the mail collaborator,
//! already MIME-decoded to plain text.

use serde::{Deserialize, Serialize};

/// An individual email message.
///
/// Immutable once constructed; the mail client builds these and nothing
/// downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Subject line.
    pub subject: String,
    /// Plain text body content.
    pub body: String,
    /// Provider-assigned message ID, when known.
    pub message_id: Option<String>,
}

impl Email {
    /// Creates a new email.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            message_id: None,
        }
    }

    /// Creates a new email with a provider message ID.
    pub fn with_message_id(
        subject: impl Into<String>,
        body: impl Into<String>,
        message_id: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            message_id: Some(message_id.into()),
        }
    }

    /// Whether this email flags its task as urgent.
    ///
    /// An email is urgent when its body contains "urgent" in any casing.
    pub fn is_urgent(&self) -> bool {
        self.body.to_lowercase().contains("urgent")
    }
}
