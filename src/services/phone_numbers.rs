//! Phone number parsing.

use crate::domain::{PhoneNumber, ValidationError};

/// Parses recipient identities into phone numbers.
pub trait PhoneNumberService: Send + Sync {
    /// Parse a recipient identity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the text is not a
    /// phone number this service understands.
    fn parse(&self, recipient_id: &str) -> Result<PhoneNumber, ValidationError>;
}

/// Parser for canonical E.164 identities.
#[derive(Debug, Clone, Copy, Default)]
pub struct E164PhoneNumberService;

impl E164PhoneNumberService {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberService for E164PhoneNumberService {
    fn parse(&self, recipient_id: &str) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::parse(recipient_id.trim())
    }
}
