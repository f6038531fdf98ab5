//! Collaborator services used while indexing.
//!
//! Services are passed to the indexers explicitly so tests can swap in
//! doubles and nothing depends on process-wide state.

mod contacts;
mod phone_numbers;

pub use contacts::{ContactDirectory, ContactsService};
pub use phone_numbers::{E164PhoneNumberService, PhoneNumberService};
