//! Index registration and search over the in-memory engine.

use conversation_search::domain::RecipientId;
use conversation_search::engine::{FullTextEngine, MemoryEngine, RegistrationMode};
use conversation_search::models::{
    ContactRecord, DirectConversation, GroupConversation, Message, ObjectKey, OpaqueObject,
    StoredObject,
};
use conversation_search::search::{SearchIndex, CONTENT_COLUMN};
use conversation_search::services::{ContactDirectory, E164PhoneNumberService};
use conversation_search::SearchConfig;
use std::sync::Arc;

const ALICE: &str = "+15551234567";
const BOB: &str = "+15557654321";

fn id(value: &str) -> RecipientId {
    RecipientId::new(value).unwrap()
}

fn search_index() -> SearchIndex {
    let directory: ContactDirectory = [
        (id(ALICE), "Alice".to_string()),
        (id(BOB), "Bob!".to_string()),
    ]
    .into_iter()
    .collect();

    SearchIndex::new(
        SearchConfig::default(),
        Arc::new(directory),
        Arc::new(E164PhoneNumberService::new()),
    )
}

fn book_club() -> GroupConversation {
    GroupConversation::new("g1", Some("Book Club".to_string()), vec![id(ALICE), id(BOB)])
}

fn search(index: &SearchIndex, engine: &MemoryEngine, text: &str) -> Vec<ObjectKey> {
    let transaction = engine.read_transaction().unwrap();
    let mut keys = Vec::new();
    index
        .search(text, &transaction, |object, _| keys.push(object.key()))
        .unwrap();
    keys
}

#[test]
fn test_group_content_column() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();
    engine.put(book_club()).unwrap();

    let columns = engine
        .indexed_columns("search_content_v1", &ObjectKey::new("group_conversations", "g1"))
        .unwrap();
    assert_eq!(
        columns.get(CONTENT_COLUMN).map(String::as_str),
        Some("Book Club +15551234567 5551234567 Alice +15557654321 5557654321 Bob")
    );
}

#[test]
fn test_group_found_by_name_member_and_formatted_number() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();
    engine.put(book_club()).unwrap();

    let expected = vec![ObjectKey::new("group_conversations", "g1")];
    assert_eq!(search(&index, &engine, "book"), expected);
    assert_eq!(search(&index, &engine, "Bob!"), expected);
    assert_eq!(search(&index, &engine, "555-1234"), expected);
    assert_eq!(search(&index, &engine, "(555) 765-4321"), expected);
    assert!(search(&index, &engine, "chess").is_empty());
}

#[test]
fn test_partial_words_match_as_you_type() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();
    engine.put(book_club()).unwrap();

    let expected = vec![ObjectKey::new("group_conversations", "g1")];
    assert_eq!(search(&index, &engine, "Bo Cl"), expected);
    assert_eq!(search(&index, &engine, "ali book"), expected);
    assert_eq!(search(&index, &engine, "ali bo"), expected);
    assert!(search(&index, &engine, "ali chess").is_empty());
}

#[test]
fn test_direct_conversation_appears_after_first_message() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();

    let mut conversation = DirectConversation::new(id(BOB));
    engine.put(conversation.clone()).unwrap();
    assert!(search(&index, &engine, "bob").is_empty());

    conversation.record_message();
    engine.put(conversation).unwrap();
    assert_eq!(
        search(&index, &engine, "bob"),
        vec![ObjectKey::new("direct_conversations", BOB)]
    );
}

#[test]
fn test_messages_and_contacts_are_searchable() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();

    engine.put(ContactRecord::new(id(ALICE))).unwrap();
    engine
        .put(Message::new("m1", "g1", "Ask Alice about the 'next' book."))
        .unwrap();
    engine.put(Message::without_body("m2", "g1")).unwrap();

    assert_eq!(
        search(&index, &engine, "alice"),
        vec![
            ObjectKey::new("contacts", ALICE),
            ObjectKey::new("messages", "m1"),
        ]
    );
    assert_eq!(
        search(&index, &engine, "next book"),
        vec![ObjectKey::new("messages", "m1")]
    );
}

#[test]
fn test_unrecognized_objects_are_not_indexed() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();

    engine
        .put(StoredObject::Other(OpaqueObject {
            collection: "attachments".to_string(),
            id: "alice.png".to_string(),
        }))
        .unwrap();

    assert_eq!(engine.object_count(), 1);
    assert_eq!(engine.indexed_row_count("search_content_v1"), Some(0));
    assert!(search(&index, &engine, "alice").is_empty());
    assert_eq!(index.metrics().objects_skipped_total(), 1);
}

#[test]
fn test_updates_and_removals_reach_the_index() {
    let engine = MemoryEngine::new();
    let index = search_index();
    index.register(&engine, RegistrationMode::Sync).unwrap();

    engine.put(Message::new("m1", "c1", "see you at lunch")).unwrap();
    assert_eq!(search(&index, &engine, "lunch").len(), 1);

    engine.put(Message::new("m1", "c1", "see you at dinner")).unwrap();
    assert!(search(&index, &engine, "lunch").is_empty());
    assert_eq!(search(&index, &engine, "dinner").len(), 1);

    engine.remove(&ObjectKey::new("messages", "m1")).unwrap();
    assert!(search(&index, &engine, "dinner").is_empty());
}

#[test]
fn test_async_registration_indexes_existing_objects() {
    let engine = MemoryEngine::new();
    engine.put(book_club()).unwrap();
    engine.put(Message::new("m1", "g1", "Chapter three tonight")).unwrap();

    let index = search_index();
    index.register(&engine, RegistrationMode::Async).unwrap();
    engine.wait_for_registrations();

    assert_eq!(engine.indexed_row_count("search_content_v1"), Some(2));
    assert_eq!(
        search(&index, &engine, "chap"),
        vec![ObjectKey::new("messages", "m1")]
    );
}

#[test]
fn test_search_before_registration_is_an_error() {
    let engine = MemoryEngine::new();
    let index = search_index();
    let transaction = engine.read_transaction().unwrap();

    assert!(index.search("alice", &transaction, |_, _| {}).is_err());
}

#[test]
fn test_new_schema_version_retires_old_index() {
    let engine = MemoryEngine::new();
    search_index()
        .register(&engine, RegistrationMode::Sync)
        .unwrap();

    let next = SearchIndex::new(
        SearchConfig {
            index_name: "search_content_v2".to_string(),
            ..SearchConfig::default()
        },
        Arc::new(ContactDirectory::new()),
        Arc::new(E164PhoneNumberService::new()),
    );
    next.register(&engine, RegistrationMode::Sync).unwrap();
    next.retire_stale_indexes(&engine).unwrap();

    assert_eq!(engine.registered_indexes(), vec!["search_content_v2".to_string()]);
}
