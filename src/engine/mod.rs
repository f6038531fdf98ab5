//! Seam between the search layer and the full-text storage engine.
//!
//! The search layer only needs three things from an engine: registering an
//! index together with a per-object indexing callback, getting a query handle
//! from a transaction, and enumerating prefix-query matches with the option to
//! stop early. [`MemoryEngine`] is the in-process implementation.

pub mod memory;

pub use memory::{MemoryEngine, MemoryTransaction};

use crate::error::{ConfigError, EngineResult};
use crate::models::StoredObject;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Column values produced for one object, keyed by column name.
pub type IndexedColumns = BTreeMap<String, String>;

/// Callback the engine invokes whenever an object is inserted or updated.
///
/// Returning `None` means the object has no entry in the index.
pub type IndexingCallback = Arc<dyn Fn(&StoredObject) -> Option<IndexedColumns> + Send + Sync>;

/// Column layout of an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSchema {
    columns: Vec<String>,
}

impl IndexSchema {
    /// Create a schema with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// The column names, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// How registration populates the index from objects already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationMode {
    /// Return immediately and populate in the background.
    #[default]
    Async,
    /// Block until every stored object has been indexed.
    Sync,
}

impl FromStr for RegistrationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "async" => Ok(Self::Async),
            "sync" => Ok(Self::Sync),
            other => Err(ConfigError::InvalidValue {
                var: "SEARCH_REGISTRATION_MODE".to_string(),
                reason: format!("Must be 'async' or 'sync', got: {}", other),
            }),
        }
    }
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Async => write!(f, "async"),
            Self::Sync => write!(f, "sync"),
        }
    }
}

/// Returned by a match handler to continue or halt enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchControl {
    Continue,
    Stop,
}

/// A full-text engine that owns index persistence.
pub trait FullTextEngine: Send + Sync {
    /// Register an index under `name`.
    ///
    /// Registering a name that already exists is a no-op.
    fn register_index(
        &self,
        name: &str,
        schema: IndexSchema,
        callback: IndexingCallback,
        mode: RegistrationMode,
    ) -> EngineResult<()>;

    /// Drop an index and everything stored in it.
    fn unregister_index(&self, name: &str) -> EngineResult<()>;

    /// Names of all registered indexes.
    fn registered_indexes(&self) -> Vec<String>;
}

/// A read transaction from which query handles are obtained.
pub trait Transaction {
    /// The query handle for an index, or `None` if no such index is registered.
    fn query_handle(&self, index_name: &str) -> Option<Box<dyn QueryHandle + '_>>;
}

/// Executes queries against one index within a transaction.
pub trait QueryHandle {
    /// Call `on_match` with `(snippet, object)` for every match, in the
    /// engine's native order, until it returns [`MatchControl::Stop`].
    fn enumerate_matches(
        &self,
        query: &str,
        on_match: &mut dyn FnMut(&str, &StoredObject) -> MatchControl,
    ) -> EngineResult<()>;
}
