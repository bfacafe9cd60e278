//! Trello API board source.
//!
//! Fetches cards from a named board via the Trello REST API, authenticating
//! with the key/token query parameters the API expects. Board names resolve
//! to IDs by exact match; an unknown board yields an empty card list rather
//! than an error, matching how a freshly emptied account behaves.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::Card;

use super::traits::{BoardSource, Result};

const BOARD_API_BASE: &str = "https://api.trello.com/1";

/// One board in the member's board list.
#[derive(Debug, Deserialize)]
struct BoardSummary {
    id: String,
    name: String,
}

/// One card in a board's card list.
#[derive(Debug, Deserialize)]
struct CardResponse {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    labels: Vec<LabelResponse>,
}

/// One label object attached to a card.
#[derive(Debug, Deserialize)]
struct LabelResponse {
    #[serde(default)]
    name: String,
}

/// Trello REST client.
pub struct TrelloClient {
    http: reqwest::Client,
    api_key: String,
    api_token: String,
}

impl TrelloClient {
    /// Creates a client from API key and token credentials.
    pub fn new(api_key: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            api_token: api_token.into(),
        }
    }

    /// Lists all boards visible to the authenticated member.
    pub async fn list_boards(&self) -> Result<Vec<(String, String)>> {
        let boards: Vec<BoardSummary> =
            self.get_json(&format!("{BOARD_API_BASE}/members/me/boards")).await?;
        Ok(boards
            .into_iter()
            .map(|board| (board.id, board.name))
            .collect())
    }

    /// Resolves a board name to its ID by exact match.
    pub async fn board_id(&self, board_name: &str) -> Result<Option<String>> {
        let boards = self.list_boards().await?;
        Ok(boards
            .into_iter()
            .find(|(_, name)| name == board_name)
            .map(|(id, _)| id))
    }

    /// Finds a card on the named board by exact name.
    pub async fn find_card(&self, board_name: &str, card_name: &str) -> Result<Option<Card>> {
        let cards = self.list_cards(board_name).await?;
        Ok(cards.into_iter().find(|card| card.name == card_name))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("token", self.api_token.as_str()),
            ])
            .send()
            .await?;
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl BoardSource for TrelloClient {
    async fn list_cards(&self, board_name: &str) -> Result<Vec<Card>> {
        let Some(board_id) = self.board_id(board_name).await? else {
            tracing::warn!(board = board_name, "board not found, returning no cards");
            return Ok(Vec::new());
        };

        let cards: Vec<CardResponse> = self
            .get_json(&format!("{BOARD_API_BASE}/boards/{board_id}/cards"))
            .await?;
        tracing::debug!(board = board_name, count = cards.len(), "fetched cards");
        Ok(cards.into_iter().map(into_card).collect())
    }
}

fn into_card(card: CardResponse) -> Card {
    let labels = card.labels.into_iter().map(|label| label.name).collect();
    Card::new(card.id, card.name, card.desc, labels)
}
