//! Conversation Search - Main entry point
//!
//! Loads a JSON fixture of stored objects into the in-memory engine, registers
//! the search index and runs each query given on the command line.
//!
//! Usage: `conversation-search <fixture.json> <query>...`

use anyhow::{bail, Context, Result};
use conversation_search::{
    ContactDirectory, E164PhoneNumberService, FullTextEngine, MemoryEngine, RecipientId,
    SearchConfig, SearchIndex, StoredObject,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Contents of a fixture file.
#[derive(Debug, Deserialize)]
struct Fixture {
    /// Display names keyed by recipient id
    #[serde(default)]
    contacts: BTreeMap<String, String>,

    /// Objects to store, in insertion order
    objects: Vec<StoredObject>,
}

fn main() -> Result<()> {
    // Load configuration
    let config = SearchConfig::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr; stdout carries results only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(fixture_path) = args.next() else {
        bail!("Usage: conversation-search <fixture.json> <query>...");
    };
    let queries: Vec<String> = args.collect();

    let raw = fs::read_to_string(&fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path))?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse fixture {}", fixture_path))?;

    let directory = ContactDirectory::new();
    for (id, name) in fixture.contacts {
        directory.set_name(RecipientId::new(id)?, name);
    }

    let engine = MemoryEngine::new();
    for object in fixture.objects {
        engine.put(object)?;
    }
    info!(objects = engine.object_count(), "Fixture loaded");

    let index = SearchIndex::new(
        config,
        Arc::new(directory),
        Arc::new(E164PhoneNumberService::new()),
    );
    index.register(&engine, index.config().registration_mode)?;
    // Queries below must see every fixture object
    engine.wait_for_registrations();
    index.retire_stale_indexes(&engine)?;

    {
        let transaction = engine.read_transaction()?;
        for query in &queries {
            let delivered = index
                .search(query, &transaction, |object, snippet| {
                    println!("{} {}: {}", object.kind_name(), object.key().id, snippet);
                })
                .map_err(|e| {
                    error!("Search failed: {}", e);
                    e
                })?;
            println!("{} result(s) for {:?}", delivered, query);
        }
    }

    info!("{}", index.metrics().summary());
    info!(indexes = ?engine.registered_indexes(), "Done");
    Ok(())
}
