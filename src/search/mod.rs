//! Search content computation and query execution.
//!
//! The write path runs every stored object through [`SearchContentIndexer`],
//! which picks the indexer for its kind and returns one normalized string
//! for the `content` column. The read path normalizes user input into a
//! prefix query and streams capped results back through a consumer.

pub mod dispatcher;
pub mod index;
pub mod indexers;
pub mod normalize;
pub mod query;

pub use dispatcher::SearchContentIndexer;
pub use index::{SearchIndex, CONTENT_COLUMN};
pub use indexers::{
    DirectConversationIndexer, GroupConversationIndexer, Indexer, MessageIndexer,
    RecipientIndexer,
};
pub use normalize::{normalize_for_indexing, normalize_for_query};
