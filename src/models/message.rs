//! Message model.

use serde::{Deserialize, Serialize};

/// A message stored in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique identifier for the message
    pub id: String,

    /// Conversation this message belongs to
    pub conversation_id: String,

    /// Body text; attachments-only messages have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Message {
    /// Create a new message with a text body.
    pub fn new(
        id: impl Into<String>,
        conversation_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            body: Some(body.into()),
        }
    }

    /// Create a message without a body.
    pub fn without_body(id: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            body: None,
        }
    }
}
