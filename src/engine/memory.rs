//! In-memory full-text engine.
//!
//! Objects are kept in insertion order and every registered index stores the
//! column values its callback produced for each object. Queries support
//! implicit AND between terms, `OR` between groups of terms and a trailing
//! `*` that makes every term a prefix term. Matching is case-insensitive on
//! alphanumeric tokens.

use super::{
    FullTextEngine, IndexSchema, IndexedColumns, IndexingCallback, MatchControl, QueryHandle,
    RegistrationMode, Transaction,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{ObjectKey, StoredObject};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Maximum snippet length in characters
const MAX_SNIPPET_LENGTH: usize = 150;

/// Context characters to show before and after match
const CONTEXT_CHARS: usize = 50;

/// An index together with the rows its callback produced.
struct RegisteredIndex {
    schema: IndexSchema,
    callback: IndexingCallback,
    rows: HashMap<ObjectKey, IndexedColumns>,
}

impl RegisteredIndex {
    /// Recompute the row for one object.
    fn reindex(&mut self, key: &ObjectKey, object: &StoredObject) {
        let columns: Option<IndexedColumns> = (self.callback)(object).map(|columns| {
            columns
                .into_iter()
                .filter(|(column, _)| self.schema.columns().contains(column))
                .collect()
        });

        match columns {
            Some(columns) if !columns.is_empty() => {
                self.rows.insert(key.clone(), columns);
            }
            _ => {
                self.rows.remove(key);
            }
        }
    }

    /// Snippet for the first column matching the query.
    fn match_row(&self, row: &IndexedColumns, query: &ParsedQuery) -> Option<String> {
        self.schema.columns().iter().find_map(|column| {
            let text = row.get(column)?;
            let tokens = tokenize(text);
            query
                .first_match(&tokens)
                .map(|token| generate_snippet(text, token))
        })
    }
}

#[derive(Default)]
struct EngineState {
    order: Vec<ObjectKey>,
    objects: HashMap<ObjectKey, StoredObject>,
    indexes: HashMap<String, RegisteredIndex>,
}

impl EngineState {
    /// Index every stored object into the named index.
    fn populate(&mut self, name: &str) -> usize {
        let EngineState {
            order,
            objects,
            indexes,
        } = self;

        let Some(index) = indexes.get_mut(name) else {
            return 0;
        };
        for key in order.iter() {
            if let Some(object) = objects.get(key) {
                index.reindex(key, object);
            }
        }
        index.rows.len()
    }
}

/// Full-text engine holding everything in memory.
///
/// Cloning is not supported; share it behind an `Arc` instead.
pub struct MemoryEngine {
    state: Arc<RwLock<EngineState>>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl MemoryEngine {
    /// Create a new empty engine.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(EngineState::default())),
            pending: Mutex::new(Vec::new()),
        }
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, EngineState>> {
        self.state.write().map_err(|_| EngineError::Poisoned)
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, EngineState>> {
        self.state.read().map_err(|_| EngineError::Poisoned)
    }

    /// Insert or replace an object, re-indexing it in every registered index.
    pub fn put(&self, object: impl Into<StoredObject>) -> EngineResult<()> {
        let object = object.into();
        let key = object.key();
        let mut state = self.write()?;

        for index in state.indexes.values_mut() {
            index.reindex(&key, &object);
        }
        if !state.objects.contains_key(&key) {
            state.order.push(key.clone());
        }
        state.objects.insert(key, object);
        Ok(())
    }

    /// Remove an object and its index rows.
    pub fn remove(&self, key: &ObjectKey) -> EngineResult<Option<StoredObject>> {
        let mut state = self.write()?;
        let removed = state.objects.remove(key);

        if removed.is_some() {
            state.order.retain(|existing| existing != key);
            for index in state.indexes.values_mut() {
                index.rows.remove(key);
            }
        }
        Ok(removed)
    }

    /// Get a stored object.
    pub fn get(&self, key: &ObjectKey) -> EngineResult<Option<StoredObject>> {
        Ok(self.read()?.objects.get(key).cloned())
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.read().map(|state| state.objects.len()).unwrap_or(0)
    }

    /// Number of rows in an index, or `None` if it is not registered.
    pub fn indexed_row_count(&self, index_name: &str) -> Option<usize> {
        let state = self.read().ok()?;
        state.indexes.get(index_name).map(|index| index.rows.len())
    }

    /// The columns stored for an object in an index.
    pub fn indexed_columns(&self, index_name: &str, key: &ObjectKey) -> Option<IndexedColumns> {
        let state = self.read().ok()?;
        state.indexes.get(index_name)?.rows.get(key).cloned()
    }

    /// Block until background index population has finished.
    pub fn wait_for_registrations(&self) {
        let handles = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };

        for handle in handles {
            if handle.join().is_err() {
                warn!("Background index population panicked");
            }
        }
    }

    /// Open a read transaction.
    ///
    /// The transaction holds the engine's read lock until it is dropped.
    /// `put`, `remove`, `register_index` in sync mode and
    /// `wait_for_registrations` all need the write lock, so calling any of them
    /// on the same thread while a transaction is alive deadlocks. This includes
    /// calls made from a match handler or a search consumer.
    pub fn read_transaction(&self) -> EngineResult<MemoryTransaction<'_>> {
        Ok(MemoryTransaction { state: self.read()? })
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FullTextEngine for MemoryEngine {
    fn register_index(
        &self,
        name: &str,
        schema: IndexSchema,
        callback: IndexingCallback,
        mode: RegistrationMode,
    ) -> EngineResult<()> {
        {
            let mut state = self.write()?;
            if state.indexes.contains_key(name) {
                debug!(index = %name, "Index already registered");
                return Ok(());
            }

            state.indexes.insert(
                name.to_string(),
                RegisteredIndex {
                    schema,
                    callback,
                    rows: HashMap::new(),
                },
            );

            if mode == RegistrationMode::Sync {
                let rows = state.populate(name);
                info!(index = %name, rows = rows, "Index registered");
                return Ok(());
            }
        }

        let state = Arc::clone(&self.state);
        let index_name = name.to_string();
        let handle = thread::spawn(move || {
            let Ok(mut guard) = state.write() else {
                warn!(index = %index_name, "Engine state poisoned, index left empty");
                return;
            };
            let rows = guard.populate(&index_name);
            info!(index = %index_name, rows = rows, "Background index population finished");
        });

        let mut pending = self.pending.lock().map_err(|_| EngineError::Poisoned)?;
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
        Ok(())
    }

    fn unregister_index(&self, name: &str) -> EngineResult<()> {
        let mut state = self.write()?;
        match state.indexes.remove(name) {
            Some(_) => {
                info!(index = %name, "Index unregistered");
                Ok(())
            }
            None => Err(EngineError::UnknownIndex(name.to_string())),
        }
    }

    fn registered_indexes(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .read()
            .map(|state| state.indexes.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

/// Read transaction over a [`MemoryEngine`].
pub struct MemoryTransaction<'a> {
    state: RwLockReadGuard<'a, EngineState>,
}

impl Transaction for MemoryTransaction<'_> {
    fn query_handle(&self, index_name: &str) -> Option<Box<dyn QueryHandle + '_>> {
        let state: &EngineState = &self.state;
        let index = state.indexes.get(index_name)?;
        Some(Box::new(MemoryQueryHandle { state, index }))
    }
}

struct MemoryQueryHandle<'a> {
    state: &'a EngineState,
    index: &'a RegisteredIndex,
}

impl QueryHandle for MemoryQueryHandle<'_> {
    fn enumerate_matches(
        &self,
        query: &str,
        on_match: &mut dyn FnMut(&str, &StoredObject) -> MatchControl,
    ) -> EngineResult<()> {
        let parsed = ParsedQuery::parse(query)?;

        for key in &self.state.order {
            let (Some(row), Some(object)) = (self.index.rows.get(key), self.state.objects.get(key))
            else {
                continue;
            };

            if let Some(snippet) = self.index.match_row(row, &parsed) {
                if on_match(&snippet, object) == MatchControl::Stop {
                    break;
                }
            }
        }
        Ok(())
    }
}

/// An alphanumeric token with its position in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    start: usize,
    len: usize,
    text: String,
}

/// Split text into lowercase alphanumeric tokens.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut len = 0;

    for (i, c) in text.chars().enumerate() {
        if c.is_alphanumeric() {
            if current.is_empty() {
                start = i;
            }
            current.extend(c.to_lowercase());
            len += 1;
        } else if !current.is_empty() {
            tokens.push(Token {
                start,
                len,
                text: std::mem::take(&mut current),
            });
            len = 0;
        }
    }
    if !current.is_empty() {
        tokens.push(Token {
            start,
            len,
            text: current,
        });
    }

    tokens
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryTerm {
    text: String,
    prefix: bool,
}

impl QueryTerm {
    fn matches(&self, token: &Token) -> bool {
        if self.prefix {
            token.text.starts_with(&self.text)
        } else {
            token.text == self.text
        }
    }
}

/// A query as alternatives (`OR`) of term conjunctions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedQuery {
    branches: Vec<Vec<QueryTerm>>,
}

impl ParsedQuery {
    /// Parse a query. A trailing `*` turns every term into a prefix term.
    fn parse(query: &str) -> EngineResult<Self> {
        let (body, prefix) = match query.trim_end().strip_suffix('*') {
            Some(body) => (body, true),
            None => (query, false),
        };
        let mut branches: Vec<Vec<QueryTerm>> = vec![Vec::new()];

        for word in body.split_whitespace() {
            if word == "OR" {
                branches.push(Vec::new());
                continue;
            }

            if let Some(branch) = branches.last_mut() {
                branch.extend(tokenize(word).into_iter().map(|piece| QueryTerm {
                    text: piece.text,
                    prefix,
                }));
            }
        }

        branches.retain(|branch| !branch.is_empty());
        if branches.is_empty() {
            return Err(EngineError::InvalidQuery {
                query: query.to_string(),
                reason: "query has no terms".to_string(),
            });
        }

        Ok(Self { branches })
    }

    /// The earliest matched token of the first satisfied branch.
    fn first_match<'t>(&self, tokens: &'t [Token]) -> Option<&'t Token> {
        self.branches.iter().find_map(|branch| {
            let mut first: Option<&Token> = None;
            for term in branch {
                let token = tokens.iter().find(|token| term.matches(token))?;
                if first.map_or(true, |current| token.start < current.start) {
                    first = Some(token);
                }
            }
            first
        })
    }
}

/// Generate a snippet with context around the matched token.
fn generate_snippet(original: &str, token: &Token) -> String {
    let chars: Vec<char> = original.chars().collect();

    // Calculate snippet boundaries
    let start = token.start.saturating_sub(CONTEXT_CHARS);
    let end = (token.start + token.len + CONTEXT_CHARS).min(chars.len());

    let mut snippet: String = chars[start..end].iter().collect();

    // Add ellipsis if truncated
    if start > 0 {
        snippet = format!("...{}", snippet);
    }
    if end < chars.len() {
        snippet.push_str("...");
    }

    // Truncate if too long
    if snippet.chars().count() > MAX_SNIPPET_LENGTH {
        snippet = snippet.chars().take(MAX_SNIPPET_LENGTH - 3).collect();
        snippet.push_str("...");
    }

    snippet
}
