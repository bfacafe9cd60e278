//! External collaborators supplying the reconciliation inputs.
//!
//! The mail and board clients fetch already-parsed [`crate::domain::Email`]
//! and [`crate::domain::Card`] entities over their REST APIs. Network and
//! auth failures here are fatal to a run; nothing retries.

mod board;
mod mail;
mod traits;

pub use board::TrelloClient;
pub use mail::GmailClient;
pub use traits::{BoardSource, MailSource, ProviderError, Result};
