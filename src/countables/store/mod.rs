//! # Storage Layer
//!
//! The [`PersistenceGateway`] trait is the only thing the rest of the library
//! knows about durable storage. It stores exactly one thing: the whole
//! canonical collection.
//!
//! ## Contract
//!
//! - `load` returns the last saved collection, or an empty one if nothing was
//!   ever saved or the stored data is unreadable. It never fails: a corrupt
//!   file means "start over", not "crash".
//! - `save` overwrites the previous snapshot in full. Order and values are
//!   preserved so that `load` after `save(s)` returns `s`.
//!
//! Callers must not `save` before their `load` has been fed into
//! [`CountableStore::initialize`](crate::collection::CountableStore::initialize).
//! [`CountablesApi`](crate::api::CountablesApi) takes care of that.
//!
//! ## Implementations
//!
//! - [`fs::FileGateway`]: production storage, a single JSON file written
//!   atomically.
//! - [`memory::InMemoryGateway`]: for tests; holds the serialized JSON so
//!   round trips still go through serde.
//! - [`queue::QueuedGateway`]: wraps another gateway and turns `save` into a
//!   fire-and-forget call, written by a background worker in call order.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── countables.json   # [{"name": "Crow", "count": 3}, ...]
//! └── config.json       # settings, see config.rs
//! ```

use crate::error::Result;
use crate::model::Countable;

pub mod fs;
pub mod memory;
pub mod queue;

pub trait PersistenceGateway {
    /// Load the last saved collection. Unreadable data degrades to empty.
    fn load(&self) -> Vec<Countable>;

    /// Overwrite the stored collection with `collection`.
    fn save(&self, collection: &[Countable]) -> Result<()>;
}

/// Parse a persisted collection.
pub(crate) fn decode(raw: &str) -> Result<Vec<Countable>> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn encode(collection: &[Countable], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(collection)?
    } else {
        serde_json::to_string(collection)?
    };
    Ok(text)
}
