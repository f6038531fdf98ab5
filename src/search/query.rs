//! Query execution against the registered search content index.

use super::index::SearchIndex;
use super::normalize::normalize_for_query;
use crate::engine::{MatchControl, Transaction};
use crate::error::{SearchError, SearchResult};
use crate::models::StoredObject;
use crate::observability::Timer;
use tracing::{debug, error, info};

impl SearchIndex {
    /// Run a prefix search and hand each match to `consumer`.
    ///
    /// The consumer receives the matched object and the engine's snippet, in
    /// the engine's native order. At most `max_results` matches are delivered;
    /// enumeration stops as soon as the cap is reached and the caller is not
    /// told that more matches may exist.
    ///
    /// Returns the number of results delivered.
    ///
    /// The consumer runs while `transaction` is open. With [`MemoryEngine`]
    /// that means the engine's read lock is held, so the consumer must not
    /// write to the engine or wait for registrations; doing so deadlocks.
    ///
    /// [`MemoryEngine`]: crate::engine::MemoryEngine
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ConfigurationIntegrity` if the index is not
    /// registered in the engine, and `SearchError::Engine` if the engine
    /// rejects the query.
    pub fn search<F>(
        &self,
        search_text: &str,
        transaction: &dyn Transaction,
        mut consumer: F,
    ) -> SearchResult<usize>
    where
        F: FnMut(&StoredObject, &str),
    {
        let timer = Timer::new("search");
        let index_name = &self.config.index_name;

        let Some(handle) = transaction.query_handle(index_name) else {
            error!(index = %index_name, "Search index is not registered");
            return Err(SearchError::ConfigurationIntegrity {
                index_name: index_name.clone(),
            });
        };

        let normalized = normalize_for_query(search_text);
        if !normalized.chars().any(char::is_alphanumeric) {
            debug!("Search text has nothing to match, skipping query");
            self.metrics.track_search(timer.finish(), 0, false);
            return Ok(0);
        }

        let prefix_query = format!("{}*", normalized);
        let max_results = self.config.max_results;
        let mut delivered = 0usize;

        handle.enumerate_matches(&prefix_query, &mut |snippet: &str, object: &StoredObject| {
            if delivered >= max_results {
                return MatchControl::Stop;
            }
            consumer(object, snippet);
            delivered += 1;
            if delivered >= max_results {
                MatchControl::Stop
            } else {
                MatchControl::Continue
            }
        })?;

        let truncated = delivered >= max_results;
        if truncated {
            info!(max_results, "Search results capped");
        }

        let duration_ms = timer.finish();
        debug!(query = %prefix_query, delivered, duration_ms = %duration_ms, "Search complete");
        self.metrics.track_search(duration_ms, delivered, truncated);
        Ok(delivered)
    }
}
