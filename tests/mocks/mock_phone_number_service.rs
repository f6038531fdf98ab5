use conversation_search::domain::{PhoneNumber, ValidationError};
use conversation_search::services::PhoneNumberService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Phone number service that rejects every input.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FailingPhoneNumberService {
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FailingPhoneNumberService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parse attempts.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PhoneNumberService for FailingPhoneNumberService {
    fn parse(&self, value: &str) -> Result<PhoneNumber, ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ValidationError::InvalidPhone {
            value: value.to_string(),
            reason: "parser unavailable",
        })
    }
}
