//! Gmail API mail source.
//!
//! Fetches recent inbox messages via the Gmail REST API (v1) using a
//! pre-obtained OAuth access token. Subjects come from payload headers;
//! bodies from the simple body when present, otherwise from the
//! concatenated `text/plain` multipart parts. A body that fails base64url
//! decoding degrades to an empty string rather than failing the fetch.

use async_trait::async_trait;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::Email;

use super::traits::{MailSource, Result};

const MAIL_API_BASE: &str = "https://gmail.googleapis.com/gmail/v1/users/me";

/// Gmail message list response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageListResponse {
    messages: Option<Vec<MessageRef>>,
}

/// Reference to one message in a list response.
#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

/// Full Gmail message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageResponse {
    id: String,
    payload: Option<MessagePayload>,
}

/// Gmail message payload (headers, body, parts).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessagePayload {
    headers: Option<Vec<MessageHeader>>,
    body: Option<MessageBody>,
    parts: Option<Vec<MessagePart>>,
}

/// One payload header.
#[derive(Debug, Deserialize)]
struct MessageHeader {
    name: String,
    value: String,
}

/// One multipart part.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessagePart {
    mime_type: Option<String>,
    body: Option<MessageBody>,
}

/// Base64url-encoded body data.
#[derive(Debug, Deserialize)]
struct MessageBody {
    data: Option<String>,
}

/// Gmail REST client.
pub struct GmailClient {
    http: reqwest::Client,
    access_token: String,
}

impl GmailClient {
    /// Creates a client around an already-obtained OAuth access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    async fn fetch_message(&self, id: &str) -> Result<Email> {
        let url = format!("{MAIL_API_BASE}/messages/{id}");
        let message: MessageResponse = self
            .get_json(&url, &[("format", "full".to_string())])
            .await?;
        Ok(Email::with_message_id(
            extract_subject(&message),
            extract_body(&message),
            message.id.clone(),
        ))
    }
}

#[async_trait]
impl MailSource for GmailClient {
    async fn list_recent(&self, max_results: u32) -> Result<Vec<Email>> {
        let url = format!("{MAIL_API_BASE}/messages");
        let list: MessageListResponse = self
            .get_json(&url, &[("maxResults", max_results.to_string())])
            .await?;

        let refs = list.messages.unwrap_or_default();
        let mut emails = Vec::with_capacity(refs.len());
        for message_ref in refs {
            emails.push(self.fetch_message(&message_ref.id).await?);
        }
        tracing::debug!(count = emails.len(), "fetched recent emails");
        Ok(emails)
    }
}

fn extract_subject(message: &MessageResponse) -> String {
    message
        .payload
        .as_ref()
        .and_then(|payload| payload.headers.as_ref())
        .and_then(|headers| {
            headers
                .iter()
                .find(|header| header.name.eq_ignore_ascii_case("subject"))
        })
        .map(|header| header.value.clone())
        .unwrap_or_default()
}

fn extract_body(message: &MessageResponse) -> String {
    let Some(payload) = &message.payload else {
        return String::new();
    };

    // Simple (non-multipart) body.
    if let Some(data) = payload.body.as_ref().and_then(|body| body.data.as_deref()) {
        return decode_body(data);
    }

    // Multipart: concatenate the text/plain parts.
    let Some(parts) = &payload.parts else {
        return String::new();
    };
    let mut body = String::new();
    for part in parts {
        if part.mime_type.as_deref() != Some("text/plain") {
            continue;
        }
        if let Some(data) = part.body.as_ref().and_then(|b| b.data.as_deref()) {
            body.push_str(&decode_body(data));
        }
    }
    body
}

/// Decodes a base64url body; garbage decodes to an empty string.
fn decode_body(data: &str) -> String {
    let bytes = URL_SAFE
        .decode(data)
        .or_else(|_| URL_SAFE_NO_PAD.decode(data));
    match bytes {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_default(),
        Err(_) => String::new(),
    }
}
