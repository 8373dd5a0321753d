/// One inbound request: somebody mentioned the bot's handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionEvent {
    /// Handle of the user who asked, without the leading '@'.
    pub requester_handle: String,
    /// Free-text place name attached to the mention. A mention without a
    /// location is a valid, expected state with its own reply path.
    pub location: Option<String>,
    /// Platform id of the source message, used to thread the reply.
    pub source_id: String,
}

impl MentionEvent {
    pub fn new(
        requester_handle: impl Into<String>,
        location: Option<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            requester_handle: requester_handle.into(),
            location,
            source_id: source_id.into(),
        }
    }
}

/// Reply to a mention. Fire-and-forget: no acknowledgement is tracked
/// beyond logging whether the post succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    pub body: String,
    pub in_reply_to: String,
}

impl ReplyMessage {
    pub fn new(body: impl Into<String>, in_reply_to: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            in_reply_to: in_reply_to.into(),
        }
    }
}
