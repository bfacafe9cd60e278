//! Run settings sourced from environment variables.

/// Environment variable names.
const TRELLO_API_KEY: &str = "TRELLO_API_KEY";
const TRELLO_API_TOKEN: &str = "TRELLO_API_TOKEN";
const GMAIL_ACCESS_TOKEN: &str = "GMAIL_ACCESS_TOKEN";
const DEFAULT_BOARD_NAME: &str = "DEFAULT_BOARD_NAME";
const MAX_EMAILS_TO_CHECK: &str = "MAX_EMAILS_TO_CHECK";

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    /// A numeric variable did not parse.
    #[error("{0} must be a non-negative integer, got '{1}'")]
    InvalidNumber(&'static str, String),
}

/// Settings for one reconciliation run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Board API key.
    pub board_api_key: String,
    /// Board API token.
    pub board_api_token: String,
    /// OAuth access token for the mail API.
    pub mail_access_token: String,
    /// Name of the board to reconcile against.
    pub board_name: String,
    /// How many recent emails to inspect.
    pub max_emails: u32,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through an injected variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let max_emails = match lookup(MAX_EMAILS_TO_CHECK) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber(MAX_EMAILS_TO_CHECK, raw))?,
            None => 50,
        };

        Ok(Self {
            board_api_key: required(TRELLO_API_KEY)?,
            board_api_token: required(TRELLO_API_TOKEN)?,
            mail_access_token: required(GMAIL_ACCESS_TOKEN)?,
            board_name: lookup(DEFAULT_BOARD_NAME).unwrap_or_else(|| "Droxi".to_string()),
            max_emails,
        })
    }
}
