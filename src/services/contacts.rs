//! Contact name resolution.

use crate::domain::RecipientId;
use std::collections::HashMap;
use std::sync::RwLock;

/// Resolves recipient identities to human-readable names.
pub trait ContactsService: Send + Sync {
    /// The name to show for a recipient.
    ///
    /// Always returns something displayable; recipients without a known name
    /// fall back to their identity.
    fn display_name(&self, recipient_id: &RecipientId) -> String;
}

/// In-memory address book.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    names: RwLock<HashMap<RecipientId, String>>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name for a recipient, replacing any previous one.
    pub fn set_name(&self, recipient_id: RecipientId, name: impl Into<String>) {
        if let Ok(mut names) = self.names.write() {
            names.insert(recipient_id, name.into());
        }
    }

    /// Forget the name of a recipient.
    pub fn remove(&self, recipient_id: &RecipientId) {
        if let Ok(mut names) = self.names.write() {
            names.remove(recipient_id);
        }
    }

    /// Number of recipients with a known name.
    pub fn len(&self) -> usize {
        self.names.read().map(|names| names.len()).unwrap_or(0)
    }

    /// Whether no names are known.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(RecipientId, String)> for ContactDirectory {
    fn from_iter<I: IntoIterator<Item = (RecipientId, String)>>(iter: I) -> Self {
        Self {
            names: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl ContactsService for ContactDirectory {
    fn display_name(&self, recipient_id: &RecipientId) -> String {
        self.names
            .read()
            .ok()
            .and_then(|names| names.get(recipient_id).cloned())
            .unwrap_or_else(|| recipient_id.as_str().to_string())
    }
}
