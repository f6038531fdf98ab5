//! Registration of the search content index with the engine.

use super::dispatcher::SearchContentIndexer;
use crate::config::{SearchConfig, INDEX_NAME_PREFIX};
use crate::engine::{
    FullTextEngine, IndexSchema, IndexedColumns, IndexingCallback, RegistrationMode,
};
use crate::error::EngineResult;
use crate::models::StoredObject;
use crate::observability::MetricsTracker;
use crate::services::{ContactsService, PhoneNumberService};
use std::sync::Arc;
use tracing::info;

/// The single column every indexed string is written into.
pub const CONTENT_COLUMN: &str = "content";

/// The conversation search index: registration plus query execution.
pub struct SearchIndex {
    pub(crate) config: SearchConfig,
    pub(crate) metrics: MetricsTracker,
    content: Arc<SearchContentIndexer>,
}

impl SearchIndex {
    /// Create the index over the given collaborator services.
    pub fn new(
        config: SearchConfig,
        contacts: Arc<dyn ContactsService>,
        phone_numbers: Arc<dyn PhoneNumberService>,
    ) -> Self {
        let metrics = MetricsTracker::new();
        let content = SearchContentIndexer::new(contacts, phone_numbers, metrics.clone());
        Self {
            config,
            metrics,
            content: Arc::new(content),
        }
    }

    /// The configuration this index was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters for indexing and search activity.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// The content dispatcher used by the indexing callback.
    pub fn content_indexer(&self) -> &SearchContentIndexer {
        &self.content
    }

    /// Schema of the index: a single `content` column.
    pub fn schema() -> IndexSchema {
        IndexSchema::new([CONTENT_COLUMN])
    }

    /// The per-object callback handed to the engine.
    ///
    /// Objects with content get a `content` column; objects without get no
    /// row at all.
    pub fn indexing_callback(&self) -> IndexingCallback {
        let content = Arc::clone(&self.content);
        Arc::new(move |object: &StoredObject| {
            content.index_content(object).map(|text| {
                let mut columns = IndexedColumns::new();
                columns.insert(CONTENT_COLUMN.to_string(), text);
                columns
            })
        })
    }

    /// Register the index with the engine.
    ///
    /// `RegistrationMode::Sync` blocks until existing objects are indexed and
    /// is meant for tests that query straight after setup.
    pub fn register(
        &self,
        engine: &dyn FullTextEngine,
        mode: RegistrationMode,
    ) -> EngineResult<()> {
        engine.register_index(
            &self.config.index_name,
            Self::schema(),
            self.indexing_callback(),
            mode,
        )?;
        info!(index = %self.config.index_name, mode = %mode, "Search index registered");
        Ok(())
    }

    /// Unregister older versions of the search content index.
    ///
    /// Returns the names that were removed.
    pub fn retire_stale_indexes(&self, engine: &dyn FullTextEngine) -> EngineResult<Vec<String>> {
        let stale: Vec<String> = engine
            .registered_indexes()
            .into_iter()
            .filter(|name| name.starts_with(INDEX_NAME_PREFIX) && *name != self.config.index_name)
            .collect();

        for name in &stale {
            engine.unregister_index(name)?;
            info!(index = %name, "Retired stale search index");
        }
        Ok(stale)
    }
}
