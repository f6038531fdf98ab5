//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Shortest subscriber number we accept, country code included.
const MIN_DIGITS: usize = 7;

/// E.164 caps numbers at fifteen digits.
const MAX_DIGITS: usize = 15;

/// Two-digit ITU country calling codes. Zones 1 and 7 use a single digit,
/// every code not listed here is three digits long.
const TWO_DIGIT_CODES: &[&str] = &[
    "20", "27", "30", "31", "32", "33", "34", "36", "39", "40", "41", "43", "44", "45", "46",
    "47", "48", "49", "51", "52", "53", "54", "55", "56", "57", "58", "60", "61", "62", "63",
    "64", "65", "66", "81", "82", "84", "86", "90", "91", "92", "93", "94", "95", "98",
];

/// A validated E.164 phone number.
///
/// The number is stored in canonical form (`+` followed by digits only), so
/// the country code and national number can be split without reformatting.
///
/// # Example
///
/// ```
/// use conversation_search::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+15551234567").unwrap();
/// assert_eq!(phone.country_code(), "1");
/// assert_eq!(phone.national_digits().as_deref(), Some("5551234567"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    e164: String,
    country_code_len: usize,
}

impl PhoneNumber {
    /// Parse a canonical E.164 string.
    ///
    /// # Validation Rules
    ///
    /// - Must start with '+'
    /// - Everything after '+' must be ASCII digits
    /// - Between 7 and 15 digits, the first of which is not zero
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` describing the first rule broken.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = |reason| ValidationError::InvalidPhone {
            value: value.to_string(),
            reason,
        };

        let digits = value
            .strip_prefix('+')
            .ok_or_else(|| invalid("must start with '+'"))?;

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must contain only digits after '+'"));
        }
        if digits.len() < MIN_DIGITS || digits.len() > MAX_DIGITS {
            return Err(invalid("must contain between 7 and 15 digits"));
        }
        if digits.starts_with('0') {
            return Err(invalid("country code cannot start with 0"));
        }

        Ok(Self {
            e164: value.to_string(),
            country_code_len: country_code_len(digits),
        })
    }

    /// The country calling code, without the leading '+'.
    pub fn country_code(&self) -> &str {
        &self.e164[1..1 + self.country_code_len]
    }

    /// The national significant number as a digit string.
    ///
    /// Returns `None` when nothing follows the country code.
    pub fn national_digits(&self) -> Option<String> {
        let national = &self.e164[1 + self.country_code_len..];
        if national.is_empty() {
            None
        } else {
            Some(national.to_string())
        }
    }
}

fn country_code_len(digits: &str) -> usize {
    if digits.starts_with('1') || digits.starts_with('7') {
        1
    } else if TWO_DIGIT_CODES.contains(&&digits[..2]) {
        2
    } else {
        3
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.e164)
    }
}
