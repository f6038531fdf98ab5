//! Conversation Search - full-text indexing and querying for a messaging store.
//!
//! This library computes the searchable text for group conversations, direct
//! conversations, messages and contacts, registers it with a full-text engine
//! as a single `content` column, and runs capped prefix searches over it.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (recipient ids, phone numbers)
//! - **models**: The stored objects handed over by the engine
//! - **services**: Contact names and phone number parsing used while indexing
//! - **search**: Normalizer, per-kind indexers, content dispatcher, index
//!   registration and the query executor
//! - **engine**: The full-text engine seam and an in-memory implementation
//! - **observability**: Indexing and search counters
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod services;

// Re-export commonly used types
pub use config::{SearchConfig, DEFAULT_MAX_RESULTS, SCHEMA_VERSION};
pub use domain::{PhoneNumber, RecipientId, ValidationError};
pub use engine::{
    FullTextEngine, IndexSchema, MatchControl, MemoryEngine, QueryHandle, RegistrationMode,
    Transaction,
};
pub use error::{ConfigError, EngineError, IndexingError, SearchError};
pub use models::{
    ContactRecord, DirectConversation, GroupConversation, Message, ObjectKey, StoredObject,
};
pub use observability::MetricsTracker;
pub use search::{normalize_for_indexing, normalize_for_query, SearchContentIndexer, SearchIndex};
pub use services::{ContactDirectory, ContactsService, E164PhoneNumberService, PhoneNumberService};
