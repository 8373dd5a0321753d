//! Mention responder - turns each inbound mention into exactly one reply

use std::sync::Arc;

use crate::application::services::FlyOverService;
use crate::domain::entities::{MentionEvent, ReplyMessage};
use crate::domain::traits::Bot;

/// Sole consumer of the fly-over pipeline.
///
/// Every mention yields exactly one reply: the pass time on success, a
/// location nudge when none was supplied, a generic apology on any lookup
/// failure. The responder never re-throws; it is the recovery boundary.
pub struct Responder {
    service: FlyOverService,
    bot: Arc<dyn Bot>,
}

impl Responder {
    pub fn new(service: FlyOverService, bot: Arc<dyn Bot>) -> Self {
        Self { service, bot }
    }

    /// Handle one mention end to end.
    ///
    /// Posting is fire-and-forget: a failed post is logged and dropped,
    /// never retried, never surfaced to the requester.
    pub async fn handle_mention(&self, event: MentionEvent) {
        let reply = self.compose_reply(&event).await;

        match self.bot.post_reply(&reply).await {
            Ok(id) => {
                tracing::info!("replied to @{} (status {})", event.requester_handle, id);
            }
            Err(e) => {
                tracing::error!("failed to post reply to @{}: {}", event.requester_handle, e);
            }
        }
    }

    async fn compose_reply(&self, event: &MentionEvent) -> ReplyMessage {
        let name = &event.requester_handle;

        let location = match &event.location {
            Some(location) => location,
            None => {
                return ReplyMessage::new(
                    format!(
                        "Hi, @{}, sorry, something went wrong. \
                         Please make sure you added a location to your tweet.",
                        name
                    ),
                    event.source_id.as_str(),
                );
            }
        };

        match self.service.fly_over(location).await {
            Ok(pass) => ReplyMessage::new(
                format!(
                    "Hi, @{}, the ISS will be over {} on {} (local time) for {} sec.",
                    name, location, pass.local_time, pass.duration_seconds
                ),
                event.source_id.as_str(),
            ),
            Err(e) => {
                tracing::error!("fly-over lookup for {:?} failed: {}", location, e);
                ReplyMessage::new(
                    format!("Hi, @{}, sorry, something went wrong. Please try again.", name),
                    event.source_id.as_str(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::errors::BotError;
    use crate::infrastructure::lookup::{Geocoder, PassPredictor, TimeLocalizer};

    /// Records posted replies instead of talking to a platform.
    struct RecordingBot {
        posts: Mutex<Vec<ReplyMessage>>,
    }

    impl RecordingBot {
        fn new() -> Self {
            Self {
                posts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn post_reply(&self, reply: &ReplyMessage) -> Result<String, BotError> {
            self.posts.lock().unwrap().push(reply.clone());
            Ok("1".to_string())
        }
    }

    /// A pipeline whose upstreams are unreachable; the missing-location
    /// branch must reply without ever touching it.
    fn dead_end_service() -> FlyOverService {
        let client = reqwest::Client::new();
        let base = "http://127.0.0.1:9";
        FlyOverService::new(
            Geocoder::new(client.clone(), base, "unused"),
            PassPredictor::new(client.clone(), base),
            TimeLocalizer::new(client, base, "unused"),
        )
    }

    #[tokio::test]
    async fn test_missing_location_gets_exactly_one_location_reply() {
        let bot = Arc::new(RecordingBot::new());
        let responder = Responder::new(dead_end_service(), bot.clone());

        let event = MentionEvent::new("astro_fan", None, "42");
        responder.handle_mention(event).await;

        let posts = bot.posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].body.contains("location"));
        assert!(posts[0].body.contains("@astro_fan"));
        assert_eq!(posts[0].in_reply_to, "42");
    }

    #[tokio::test]
    async fn test_lookup_failure_gets_exactly_one_apology_reply() {
        let bot = Arc::new(RecordingBot::new());
        let responder = Responder::new(dead_end_service(), bot.clone());

        let event = MentionEvent::new("astro_fan", Some("New York".to_string()), "43");
        responder.handle_mention(event).await;

        let posts = bot.posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].body.contains("Please try again"));
        assert_eq!(posts[0].in_reply_to, "43");
    }
}
