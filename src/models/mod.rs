//! Data models for the stored objects the search layer sees.
//!
//! Every object handed over by the storage engine is one of the variants of
//! [`StoredObject`]. Four of them are searchable; anything else arrives as an
//! [`OpaqueObject`] and is never indexed.

pub mod contact;
pub mod conversation;
pub mod message;
pub mod object;

pub use contact::ContactRecord;
pub use conversation::{DirectConversation, GroupConversation};
pub use message::Message;
pub use object::{ObjectKey, OpaqueObject, StoredObject};
