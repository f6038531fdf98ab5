//! Per-kind indexers producing the searchable string for an object.

use super::normalize::normalize_for_indexing;
use crate::domain::RecipientId;
use crate::error::{IndexingError, IndexingResult};
use crate::models::{DirectConversation, GroupConversation, Message};
use crate::observability::MetricsTracker;
use crate::services::{ContactsService, PhoneNumberService};
use std::sync::Arc;
use tracing::warn;

/// Produces the normalized searchable text for one kind of item.
pub trait Indexer<T: ?Sized> {
    /// The text to store in the index for `item`.
    fn index(&self, item: &T) -> String;
}

/// Indexes a recipient by identity, national number digits and display name.
#[derive(Clone)]
pub struct RecipientIndexer {
    contacts: Arc<dyn ContactsService>,
    phone_numbers: Arc<dyn PhoneNumberService>,
    metrics: MetricsTracker,
}

impl RecipientIndexer {
    /// Create a new recipient indexer.
    pub fn new(
        contacts: Arc<dyn ContactsService>,
        phone_numbers: Arc<dyn PhoneNumberService>,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            contacts,
            phone_numbers,
            metrics,
        }
    }

    /// Digits of the recipient's national number.
    ///
    /// # Errors
    ///
    /// Returns `IndexingError::MalformedRecipientIdentity` if the id does not
    /// parse as a phone number.
    pub fn national_digits(&self, recipient_id: &RecipientId) -> IndexingResult<String> {
        let phone = self
            .phone_numbers
            .parse(recipient_id.as_str())
            .map_err(|err| IndexingError::MalformedRecipientIdentity {
                recipient_id: recipient_id.to_string(),
                reason: err.to_string(),
            })?;

        Ok(phone
            .national_digits()
            .map(|digits| digits.chars().filter(char::is_ascii_digit).collect())
            .unwrap_or_default())
    }
}

impl Indexer<RecipientId> for RecipientIndexer {
    fn index(&self, recipient_id: &RecipientId) -> String {
        let display_name = self.contacts.display_name(recipient_id);
        let national_digits = self.national_digits(recipient_id).unwrap_or_else(|err| {
            warn!(error = %err, "Indexing recipient without national number digits");
            self.metrics.track_malformed_recipient();
            String::new()
        });

        normalize_for_indexing(&format!(
            "{} {} {}",
            recipient_id, national_digits, display_name
        ))
    }
}

/// Indexes a group by name and the identities of all its members.
#[derive(Clone)]
pub struct GroupConversationIndexer {
    recipients: RecipientIndexer,
}

impl GroupConversationIndexer {
    /// Create a new group indexer.
    pub fn new(recipients: RecipientIndexer) -> Self {
        Self { recipients }
    }
}

impl Indexer<GroupConversation> for GroupConversationIndexer {
    fn index(&self, group: &GroupConversation) -> String {
        let member_strings = group
            .members
            .iter()
            .map(|member| self.recipients.index(member))
            .collect::<Vec<_>>()
            .join(" ");
        let group_name = group.name.as_deref().unwrap_or_default();

        normalize_for_indexing(&format!("{} {}", group_name, member_strings))
    }
}

/// Indexes a direct conversation by its counterpart.
///
/// Callers decide whether the conversation belongs in the index at all.
#[derive(Clone)]
pub struct DirectConversationIndexer {
    recipients: RecipientIndexer,
}

impl DirectConversationIndexer {
    /// Create a new direct conversation indexer.
    pub fn new(recipients: RecipientIndexer) -> Self {
        Self { recipients }
    }
}

impl Indexer<DirectConversation> for DirectConversationIndexer {
    fn index(&self, conversation: &DirectConversation) -> String {
        normalize_for_indexing(&self.recipients.index(&conversation.recipient_id))
    }
}

/// Indexes a message by its body.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageIndexer;

impl Indexer<Message> for MessageIndexer {
    fn index(&self, message: &Message) -> String {
        normalize_for_indexing(message.body.as_deref().unwrap_or_default())
    }
}
