//! Contact record model.

use crate::domain::RecipientId;
use serde::{Deserialize, Serialize};

/// A known account in the address book.
///
/// Only the identity is stored here. The display name is resolved through
/// the contacts service at indexing time so renames are picked up on the
/// next write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Canonical recipient id (E.164)
    pub recipient_id: RecipientId,
}

impl ContactRecord {
    /// Create a new contact record.
    pub fn new(recipient_id: RecipientId) -> Self {
        Self { recipient_id }
    }
}
