use conversation_search::engine::{MatchControl, QueryHandle, Transaction};
use conversation_search::error::EngineResult;
use conversation_search::models::StoredObject;
use std::sync::{Arc, Mutex};

/// One match the scripted engine reports.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ScriptedMatch {
    pub snippet: String,
    pub object: StoredObject,
}

#[allow(dead_code)]
#[derive(Default)]
struct Recorded {
    queries: Vec<String>,
    offered: usize,
    stopped: bool,
}

/// Transaction that serves a fixed list of matches for one index name.
///
/// Records the queries it received, how many matches it offered and whether
/// the handler asked it to stop.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockTransaction {
    index_name: String,
    matches: Arc<Vec<ScriptedMatch>>,
    recorded: Arc<Mutex<Recorded>>,
}

#[allow(dead_code)]
impl MockTransaction {
    /// Create a transaction with `index_name` registered and no matches.
    pub fn new(index_name: &str) -> Self {
        Self::with_matches(index_name, Vec::new())
    }

    pub fn with_matches(index_name: &str, matches: Vec<ScriptedMatch>) -> Self {
        Self {
            index_name: index_name.to_string(),
            matches: Arc::new(matches),
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    /// Queries received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.recorded.lock().unwrap().queries.clone()
    }

    /// Matches handed to the handler across all queries.
    pub fn offered(&self) -> usize {
        self.recorded.lock().unwrap().offered
    }

    /// Whether the handler returned `Stop`.
    pub fn stopped(&self) -> bool {
        self.recorded.lock().unwrap().stopped
    }
}

impl Transaction for MockTransaction {
    fn query_handle(&self, index_name: &str) -> Option<Box<dyn QueryHandle + '_>> {
        if index_name == self.index_name {
            Some(Box::new(self.clone()))
        } else {
            None
        }
    }
}

impl QueryHandle for MockTransaction {
    fn enumerate_matches(
        &self,
        query: &str,
        on_match: &mut dyn FnMut(&str, &StoredObject) -> MatchControl,
    ) -> EngineResult<()> {
        self.recorded.lock().unwrap().queries.push(query.to_string());

        for scripted in self.matches.iter() {
            self.recorded.lock().unwrap().offered += 1;
            if on_match(&scripted.snippet, &scripted.object) == MatchControl::Stop {
                self.recorded.lock().unwrap().stopped = true;
                break;
            }
        }
        Ok(())
    }
}
