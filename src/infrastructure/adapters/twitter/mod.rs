//! Twitter adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::BotError;
use crate::domain::entities::{MentionEvent, ReplyMessage};
use crate::domain::traits::Bot;

/// Twitter API base URL
pub const API_BASE: &str = "https://api.twitter.com/1.1";

/// One status from the mentions timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: u64,
    pub user: StatusUser,
    pub place: Option<Place>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUser {
    pub screen_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub full_name: String,
}

impl Status {
    /// A null `place` is the platform's sentinel for "no location supplied".
    pub fn into_mention(self) -> MentionEvent {
        MentionEvent::new(
            self.user.screen_name,
            self.place.map(|p| p.full_name),
            self.id.to_string(),
        )
    }
}

/// Twitter bot adapter
pub struct TwitterAdapter {
    client: Client,
    base_url: String,
    access_token: String,
    handle: String,
}

impl TwitterAdapter {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_token: access_token.into(),
            handle: handle.into(),
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Fetch mentions of the bot's handle newer than `since_id`.
    pub async fn poll_mentions(&self, since_id: u64) -> Result<Vec<MentionEvent>, BotError> {
        let url = self.api_url("statuses/mentions_timeline.json");
        let response = self.client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("since_id", since_id.to_string())])
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Network(format!(
                "Twitter API error: {}",
                response.status()
            )));
        }

        let statuses: Vec<Status> = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        Ok(statuses.into_iter().map(Status::into_mention).collect())
    }

    /// Poll cursor for the next fetch: the highest status id seen so far.
    pub fn next_since_id(mentions: &[MentionEvent], current: u64) -> u64 {
        mentions
            .iter()
            .filter_map(|m| m.source_id.parse().ok())
            .fold(current, u64::max)
    }
}

#[async_trait]
impl Bot for TwitterAdapter {
    async fn post_reply(&self, reply: &ReplyMessage) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            status: &'a str,
            in_reply_to_status_id: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        tracing::debug!("posting reply to status {}", reply.in_reply_to);

        let url = self.api_url("statuses/update.json");
        let request = UpdateRequest {
            status: &reply.body,
            in_reply_to_status_id: &reply.in_reply_to,
        };

        let response = self.client
            .post(&url)
            .bearer_auth(&self.access_token)
            .form(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Network(format!(
                "Twitter API error: {}",
                response.status()
            )));
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        Ok(data.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_place_becomes_located_mention() {
        let json = r#"{
            "id": 1001,
            "user": {"screen_name": "astro_fan"},
            "place": {"full_name": "New York, NY"}
        }"#;
        let status: Status = serde_json::from_str(json).unwrap();
        let mention = status.into_mention();

        assert_eq!(mention.requester_handle, "astro_fan");
        assert_eq!(mention.location.as_deref(), Some("New York, NY"));
        assert_eq!(mention.source_id, "1001");
    }

    #[test]
    fn test_status_with_null_place_has_no_location() {
        let json = r#"{
            "id": 1002,
            "user": {"screen_name": "astro_fan"},
            "place": null
        }"#;
        let status: Status = serde_json::from_str(json).unwrap();
        let mention = status.into_mention();

        assert_eq!(mention.location, None);
    }

    #[test]
    fn test_next_since_id_keeps_highest() {
        let mentions = vec![
            MentionEvent::new("a", None, "5"),
            MentionEvent::new("b", None, "12"),
            MentionEvent::new("c", None, "7"),
        ];
        assert_eq!(TwitterAdapter::next_since_id(&mentions, 3), 12);
        assert_eq!(TwitterAdapter::next_since_id(&mentions, 20), 20);
        assert_eq!(TwitterAdapter::next_since_id(&[], 20), 20);
    }
}
