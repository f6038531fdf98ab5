//! RecipientId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for recipient identities.
///
/// Recipient ids are expected to be canonical E.164 phone numbers, but this
/// type only guarantees they are non-empty. Phone number parsing happens
/// later and is allowed to fail.
///
/// # Example
///
/// ```
/// use conversation_search::domain::RecipientId;
///
/// let id = RecipientId::new("+15551234567").unwrap();
/// assert_eq!(id.as_str(), "+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipientId(String);

impl RecipientId {
    /// Create a new RecipientId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for RecipientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecipientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecipientId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_id_valid() {
        let id = RecipientId::new("+15551234567").unwrap();
        assert_eq!(id.as_str(), "+15551234567");
    }

    #[test]
    fn test_recipient_id_rejects_empty() {
        assert_eq!(RecipientId::new(""), Err(ValidationError::EmptyId));
        assert_eq!(RecipientId::new("   "), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_recipient_id_does_not_require_phone_shape() {
        // Malformed identities are caught when indexing, not here
        assert!(RecipientId::new("not-a-number").is_ok());
    }

    #[test]
    fn test_recipient_id_serialization() {
        let id = RecipientId::new("+15551234567").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"+15551234567\"");
    }

    #[test]
    fn test_recipient_id_deserialization_empty_fails() {
        let result: Result<RecipientId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
