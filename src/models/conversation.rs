//! Conversation models.

use crate::domain::RecipientId;
use serde::{Deserialize, Serialize};

/// A group conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupConversation {
    /// Unique identifier for the group
    pub group_id: String,

    /// Display name; groups may be unnamed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current members
    #[serde(default)]
    pub members: Vec<RecipientId>,
}

impl GroupConversation {
    /// Create a new group conversation.
    pub fn new(
        group_id: impl Into<String>,
        name: Option<String>,
        members: Vec<RecipientId>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            name,
            members,
        }
    }
}

/// A one-to-one conversation with another recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectConversation {
    /// The other party of the conversation
    pub recipient_id: RecipientId,

    /// Whether a message was ever stored in this conversation.
    ///
    /// Conversations created only to look up a contact stay out of search
    /// results until this is set.
    #[serde(default)]
    pub has_ever_had_message: bool,
}

impl DirectConversation {
    /// Create a conversation that has not seen any message yet.
    pub fn new(recipient_id: RecipientId) -> Self {
        Self {
            recipient_id,
            has_ever_had_message: false,
        }
    }

    /// Record that a message was stored in this conversation.
    pub fn record_message(&mut self) {
        self.has_ever_had_message = true;
    }
}
