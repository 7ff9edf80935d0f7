//! In-memory caching module for camp and category snapshots.
//!
//! Snapshots live for the process lifetime and are reset only by an
//! explicit `invalidate()` call. Fetch failures degrade to empty lists.

pub mod store;

pub use store::{CampCache, RecordSource};
