use conversation_search::domain::RecipientId;
use conversation_search::services::ContactsService;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contacts service for testing.
///
/// Returns configured display names and records every lookup so tests can
/// verify which recipients the indexers asked about.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactsService {
    names: Arc<Mutex<HashMap<String, String>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockContactsService {
    /// Create a new mock with no names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the display name for a recipient.
    pub fn with_name(self, recipient_id: &str, name: &str) -> Self {
        self.names
            .lock()
            .unwrap()
            .insert(recipient_id.to_string(), name.to_string());
        self
    }

    /// Recipient ids looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ContactsService for MockContactsService {
    fn display_name(&self, recipient_id: &RecipientId) -> String {
        self.lookups
            .lock()
            .unwrap()
            .push(recipient_id.to_string());
        self.names
            .lock()
            .unwrap()
            .get(recipient_id.as_str())
            .cloned()
            .unwrap_or_default()
    }
}
