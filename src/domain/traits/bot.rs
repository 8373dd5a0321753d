use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::ReplyMessage;

/// Bot trait - abstraction for the social platform adapter
#[async_trait]
pub trait Bot: Send + Sync {
    /// Post a reply to the platform. Returns the id of the posted status.
    async fn post_reply(&self, reply: &ReplyMessage) -> Result<String, BotError>;
}
