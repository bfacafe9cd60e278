//! Provider trait definitions.
//!
//! [`MailSource`] and [`BoardSource`] abstract over the concrete REST
//! clients so the binary and tests can swap in fakes.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Card, Email};

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors from the mail or board collaborators.
///
/// These are fatal to a reconciliation run; callers propagate them rather
/// than degrading to a sentinel.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Authentication failed or credentials expired.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Network or connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The service answered with something unusable.
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return ProviderError::Connection(err.to_string());
        }
        if let Some(status) = err.status() {
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                return ProviderError::Authentication(err.to_string());
            }
            if status == reqwest::StatusCode::NOT_FOUND {
                return ProviderError::NotFound(err.to_string());
            }
        }
        ProviderError::Provider(err.to_string())
    }
}

/// Source of inbox emails, already MIME-decoded to plain text.
#[async_trait]
pub trait MailSource: Send + Sync {
    /// Fetches the most recent emails, up to `max_results`.
    async fn list_recent(&self, max_results: u32) -> Result<Vec<Email>>;

    /// Fetches recent emails and keeps only the urgent ones.
    async fn urgent_emails(&self, max_results: u32) -> Result<Vec<Email>> {
        let emails = self.list_recent(max_results).await?;
        Ok(emails.into_iter().filter(Email::is_urgent).collect())
    }

    /// Fetches recent emails grouped by exact subject.
    ///
    /// Groups appear in the order their subject was first seen; within a
    /// group, emails keep their fetch order.
    async fn grouped_by_subject(
        &self,
        max_results: u32,
    ) -> Result<Vec<(String, Vec<Email>)>> {
        let emails = self.list_recent(max_results).await?;
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<Email>> = HashMap::new();
        for email in emails {
            if !groups.contains_key(&email.subject) {
                order.push(email.subject.clone());
            }
            groups.entry(email.subject.clone()).or_default().push(email);
        }
        Ok(order
            .into_iter()
            .map(|subject| {
                let group = groups.remove(&subject).unwrap_or_default();
                (subject, group)
            })
            .collect())
    }
}

/// Source of board cards.
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetches all cards from the named board.
    async fn list_cards(&self, board_name: &str) -> Result<Vec<Card>>;
}
