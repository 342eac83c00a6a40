//! # API Facade
//!
//! [`CountablesApi`] is the single entry point for every UI. It plays the
//! controller role: it owns the [`CountableStore`] and a
//! [`PersistenceGateway`] and wires them together.
//!
//! ## Load, then persist
//!
//! 1. [`CountablesApi::load`] reads the snapshot and feeds it to
//!    [`CountableStore::initialize`], which marks the store ready.
//! 2. Every operation that changes canonical state (`CmdResult::mutated`) is
//!    followed by exactly one `save` of the full collection.
//! 3. Nothing is saved while the store is not ready. A UI that mutates before
//!    loading only changes memory; it can never overwrite a good snapshot with
//!    an empty one.
//!
//! Saving is best-effort: a failed save never rolls back memory. It is logged
//! and reported as a warning message on the result of the operation that
//! triggered it.
//!
//! ## What the API does NOT do
//!
//! - Business logic: that is in `commands/*.rs` and `collection.rs`.
//! - Presentation: results are data (`CmdResult`), not strings for a terminal.
//!
//! ## Generic over the gateway
//!
//! - Production: `CountablesApi<QueuedGateway<FileGateway>>`
//! - Testing: `CountablesApi<InMemoryGateway>`

use crate::collection::CountableStore;
use crate::commands;
use crate::error::Result;
use crate::store::PersistenceGateway;
use tracing::{debug, warn};

pub struct CountablesApi<G: PersistenceGateway> {
    store: CountableStore,
    gateway: G,
    paths: commands::CountablesPaths,
}

impl<G: PersistenceGateway> CountablesApi<G> {
    /// An API whose store is not loaded yet. Call [`load`](Self::load) before
    /// mutating, or changes will not be persisted.
    pub fn new(gateway: G, paths: commands::CountablesPaths) -> Self {
        Self {
            store: CountableStore::new(),
            gateway,
            paths,
        }
    }

    /// Build and load in one go.
    pub fn open(gateway: G, paths: commands::CountablesPaths) -> Result<Self> {
        let mut api = Self::new(gateway, paths);
        api.load()?;
        Ok(api)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let mut result = commands::CmdResult::default();
        if self.store.is_ready() {
            result.add_message(commands::CmdMessage::info("Already loaded"));
            return Ok(result);
        }
        let snapshot = self.gateway.load();
        result.add_message(commands::CmdMessage::info(format!(
            "Loaded {} countables",
            snapshot.len()
        )));
        self.store.initialize(snapshot);
        Ok(result)
    }

    pub fn add(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.store, name)?;
        Ok(self.persist(result))
    }

    pub fn remove(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::remove::run(&mut self.store, name)?;
        Ok(self.persist(result))
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<commands::CmdResult> {
        let result = commands::rename::run(&mut self.store, old_name, new_name)?;
        Ok(self.persist(result))
    }

    /// `index` is the canonical position, not the display position.
    pub fn change_count(&mut self, delta: i64, index: usize) -> Result<commands::CmdResult> {
        let result = commands::count::run(&mut self.store, delta, index)?;
        Ok(self.persist(result))
    }

    pub fn increment(&mut self, name: &str, by: u32) -> Result<commands::CmdResult> {
        let result = commands::count::by_name(&mut self.store, name, i64::from(by))?;
        Ok(self.persist(result))
    }

    pub fn decrement(&mut self, name: &str, by: u32) -> Result<commands::CmdResult> {
        let result = commands::count::by_name(&mut self.store, name, -i64::from(by))?;
        Ok(self.persist(result))
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn data_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.paths)
    }

    pub fn store(&self) -> &CountableStore {
        &self.store
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn paths(&self) -> &commands::CountablesPaths {
        &self.paths
    }

    fn persist(&self, mut result: commands::CmdResult) -> commands::CmdResult {
        if !result.mutated {
            return result;
        }
        if !self.store.is_ready() {
            debug!("store not loaded yet, skipping save");
            return result;
        }
        if let Err(e) = self.gateway.save(self.store.entries()) {
            warn!(error = %e, "save failed, keeping in-memory state");
            result.add_message(commands::CmdMessage::warning(format!(
                "Changes could not be saved: {}",
                e
            )));
        }
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, CountablesPaths, MessageLevel};
