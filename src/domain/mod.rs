//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for recipient identities and
//! phone numbers. These value objects provide validation at construction
//! time and prevent invalid data from being represented in the system.

pub mod errors;
pub mod phone;
pub mod recipient_id;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use recipient_id::RecipientId;
