//! Observability for the search layer.
//!
//! Counters for indexing and query activity, reported through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
