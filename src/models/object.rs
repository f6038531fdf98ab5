//! The closed set of objects the storage engine hands to the search layer.

use super::{ContactRecord, DirectConversation, GroupConversation, Message};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection name for group conversations.
pub const GROUP_CONVERSATIONS: &str = "group_conversations";
/// Collection name for direct conversations.
pub const DIRECT_CONVERSATIONS: &str = "direct_conversations";
/// Collection name for messages.
pub const MESSAGES: &str = "messages";
/// Collection name for contact records.
pub const CONTACTS: &str = "contacts";

/// Identity of a stored object: the collection it lives in plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey {
    pub collection: String,
    pub id: String,
}

impl ObjectKey {
    /// Create a new object key.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// A stored object that is not searchable (attachments, settings, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpaqueObject {
    pub collection: String,
    pub id: String,
}

/// Any object stored by the engine.
///
/// New searchable kinds are added here; the content dispatcher matches
/// exhaustively so a missing indexer is a compile error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoredObject {
    GroupConversation(GroupConversation),
    DirectConversation(DirectConversation),
    Message(Message),
    Contact(ContactRecord),
    Other(OpaqueObject),
}

impl StoredObject {
    /// The key under which this object is stored.
    pub fn key(&self) -> ObjectKey {
        match self {
            Self::GroupConversation(group) => ObjectKey::new(GROUP_CONVERSATIONS, &group.group_id),
            Self::DirectConversation(conversation) => {
                ObjectKey::new(DIRECT_CONVERSATIONS, conversation.recipient_id.as_str())
            }
            Self::Message(message) => ObjectKey::new(MESSAGES, &message.id),
            Self::Contact(contact) => ObjectKey::new(CONTACTS, contact.recipient_id.as_str()),
            Self::Other(other) => ObjectKey::new(&other.collection, &other.id),
        }
    }

    /// Short name of the object kind, for logs and display.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::GroupConversation(_) => "group",
            Self::DirectConversation(_) => "direct",
            Self::Message(_) => "message",
            Self::Contact(_) => "contact",
            Self::Other(_) => "other",
        }
    }
}

impl From<GroupConversation> for StoredObject {
    fn from(group: GroupConversation) -> Self {
        Self::GroupConversation(group)
    }
}

impl From<DirectConversation> for StoredObject {
    fn from(conversation: DirectConversation) -> Self {
        Self::DirectConversation(conversation)
    }
}

impl From<Message> for StoredObject {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl From<ContactRecord> for StoredObject {
    fn from(contact: ContactRecord) -> Self {
        Self::Contact(contact)
    }
}
