//! Routes stored objects to the indexer for their kind.

use super::indexers::{
    DirectConversationIndexer, GroupConversationIndexer, Indexer, MessageIndexer,
    RecipientIndexer,
};
use crate::error::IndexingError;
use crate::models::StoredObject;
use crate::observability::MetricsTracker;
use crate::services::{ContactsService, PhoneNumberService};
use std::sync::Arc;
use tracing::debug;

/// Computes the `content` column value for any stored object.
#[derive(Clone)]
pub struct SearchContentIndexer {
    recipients: RecipientIndexer,
    groups: GroupConversationIndexer,
    direct_conversations: DirectConversationIndexer,
    messages: MessageIndexer,
    metrics: MetricsTracker,
}

impl SearchContentIndexer {
    /// Create a dispatcher over the given collaborator services.
    pub fn new(
        contacts: Arc<dyn ContactsService>,
        phone_numbers: Arc<dyn PhoneNumberService>,
        metrics: MetricsTracker,
    ) -> Self {
        let recipients = RecipientIndexer::new(contacts, phone_numbers, metrics.clone());
        Self {
            groups: GroupConversationIndexer::new(recipients.clone()),
            direct_conversations: DirectConversationIndexer::new(recipients.clone()),
            recipients,
            messages: MessageIndexer,
            metrics,
        }
    }

    /// The searchable text for `object`, or `None` if it must not be indexed.
    ///
    /// Direct conversations that never had a message are left out so they
    /// do not show up as conversation results.
    pub fn index_content(&self, object: &StoredObject) -> Option<String> {
        let content = match object {
            StoredObject::GroupConversation(group) => Some(self.groups.index(group)),
            StoredObject::DirectConversation(conversation)
                if !conversation.has_ever_had_message =>
            {
                debug!(
                    recipient_id = %conversation.recipient_id,
                    "Skipping direct conversation without messages"
                );
                None
            }
            StoredObject::DirectConversation(conversation) => {
                Some(self.direct_conversations.index(conversation))
            }
            StoredObject::Message(message) => Some(self.messages.index(message)),
            StoredObject::Contact(contact) => Some(self.recipients.index(&contact.recipient_id)),
            StoredObject::Other(other) => {
                let err = IndexingError::UnrecognizedEntityKind {
                    collection: other.collection.clone(),
                };
                debug!(error = %err, "Object not indexed");
                None
            }
        };

        self.metrics
            .track_indexing(object.kind_name(), content.is_some());
        content
    }
}
