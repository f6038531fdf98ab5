//! Error types for the conversation search layer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors surfaced to callers of a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The engine has no query handle for the configured index.
    ///
    /// Either registration never happened or the index name does not match.
    #[error("No query handle for search index '{index_name}'")]
    ConfigurationIntegrity { index_name: String },

    /// The engine rejected the query
    #[error("Search engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Errors raised while computing the searchable content of an object.
///
/// These never escape the indexing callback: they are logged and the
/// offending contribution is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexingError {
    /// A recipient id could not be parsed as a phone number
    #[error("Malformed recipient identity '{recipient_id}': {reason}")]
    MalformedRecipientIdentity {
        recipient_id: String,
        reason: String,
    },

    /// The object is not one of the searchable kinds
    #[error("Unrecognized entity kind in collection '{collection}'")]
    UnrecognizedEntityKind { collection: String },
}

/// Errors reported by a full-text engine implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No index with this name is registered
    #[error("Unknown index: {0}")]
    UnknownIndex(String),

    /// The query could not be parsed
    #[error("Invalid query '{query}': {reason}")]
    InvalidQuery { query: String, reason: String },

    /// Internal engine state is unusable after a panic in another thread
    #[error("Engine state poisoned")]
    Poisoned,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with IndexingError
pub type IndexingResult<T> = Result<T, IndexingError>;

/// Convenience type alias for Results with EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
