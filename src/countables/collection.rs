//! # The Countable Store
//!
//! [`CountableStore`] owns the canonical collection: a `Vec<Countable>` in
//! insertion order. That order is what gets persisted and what
//! [`CountableStore::change_count`] indexes into. Display order is a separate,
//! derived projection (see [`crate::view`]).
//!
//! ## Invariants
//!
//! - No two entries have names that collide case-insensitively.
//! - Every entry's trimmed name is non-empty.
//! - Counts never go below zero.
//!
//! `add` and `rename` enforce the first two; `change_count` enforces the
//! third. `initialize` trusts its snapshot, which only ever comes from a
//! previous save of this same store.
//!
//! ## Validation results are values
//!
//! The boolean methods (`add`, `rename`) are the plain surface: `false` means
//! "nothing changed". The `try_*` variants return a [`ValidationFailure`] so a
//! caller can tell an empty name from a duplicate without re-deriving it.
//!
//! ## The ready flag
//!
//! A fresh store is *not ready*. It becomes ready once [`initialize`] has been
//! fed the persisted snapshot. Callers must not persist a store that is not
//! ready, or they would overwrite a valid snapshot with an empty one. The
//! store itself never persists anything.
//!
//! [`initialize`]: CountableStore::initialize

use crate::error::{CountablesError, Result, ValidationFailure};
use crate::model::Countable;
use crate::view::{self, DisplayCountable};
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct CountableStore {
    entries: Vec<Countable>,
    ready: bool,
}

impl CountableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with a loaded snapshot and mark the store ready.
    pub fn initialize(&mut self, snapshot: Vec<Countable>) {
        debug!(entries = snapshot.len(), "store initialized");
        self.entries = snapshot;
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The canonical collection, in insertion order.
    pub fn entries(&self) -> &[Countable] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical index of the entry with exactly this name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Countable> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn add(&mut self, raw_name: &str) -> bool {
        self.try_add(raw_name).is_ok()
    }

    /// Append a new countable named `raw_name` (trimmed) with a count of zero.
    pub fn try_add(&mut self, raw_name: &str) -> std::result::Result<&Countable, ValidationFailure> {
        let name = raw_name.trim();
        self.check_name(name, None)?;

        let idx = self.entries.len();
        self.entries.push(Countable::new(name));
        debug!(name, index = idx, "countable added");
        Ok(&self.entries[idx])
    }

    /// Remove the entry named exactly `name`. Nothing happens if there is none.
    pub fn remove(&mut self, name: &str) -> Option<Countable> {
        let idx = self.index_of(name)?;
        let removed = self.entries.remove(idx);
        debug!(name, index = idx, "countable removed");
        Some(removed)
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) -> bool {
        self.try_rename(old_name, new_name).is_ok()
    }

    /// Rename the entry named exactly `old_name`.
    ///
    /// `new_name` is stored as given; only its trimmed form is validated.
    /// Renaming to a different casing of the same name is allowed.
    pub fn try_rename(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> std::result::Result<&Countable, ValidationFailure> {
        if new_name.trim().is_empty() {
            return Err(ValidationFailure::EmptyName);
        }
        let idx = self
            .index_of(old_name)
            .ok_or_else(|| ValidationFailure::NotFound(old_name.to_string()))?;
        self.check_name(new_name, Some(idx))?;

        self.entries[idx].name = new_name.to_string();
        debug!(old_name, new_name, index = idx, "countable renamed");
        Ok(&self.entries[idx])
    }

    /// Add `delta` to the count at canonical position `index`.
    ///
    /// Rejects out-of-range indexes and results below zero; on error the
    /// collection is unchanged.
    pub fn change_count(&mut self, delta: i64, index: usize) -> Result<u64> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CountablesError::InvalidIndex { index, len })?;

        let updated = entry.count.checked_add_signed(delta).ok_or_else(|| {
            if delta < 0 {
                CountablesError::NegativeCount {
                    name: entry.name.clone(),
                    count: entry.count,
                    delta,
                }
            } else {
                CountablesError::CountOverflow {
                    name: entry.name.clone(),
                }
            }
        })?;

        entry.count = updated;
        debug!(name = %entry.name, delta, count = updated, "count changed");
        Ok(updated)
    }

    /// Display-ordered copy of the collection. Recomputed on every call.
    pub fn sorted_view(&self) -> Vec<Countable> {
        view::sorted_view(&self.entries)
    }

    /// Display-ordered rows carrying canonical indexes.
    pub fn display(&self) -> Vec<DisplayCountable> {
        view::project(&self.entries)
    }

    fn check_name(
        &self,
        name: &str,
        except: Option<usize>,
    ) -> std::result::Result<(), ValidationFailure> {
        if name.trim().is_empty() {
            return Err(ValidationFailure::EmptyName);
        }
        let clash = self
            .entries
            .iter()
            .enumerate()
            .find(|(i, c)| Some(*i) != except && c.same_name_as(name));
        match clash {
            Some((_, existing)) => Err(ValidationFailure::DuplicateName(existing.name.clone())),
            None => Ok(()),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A ready store holding `entries` in the given canonical order.
    pub fn ready_store(entries: &[(&str, u64)]) -> CountableStore {
        let mut store = CountableStore::new();
        store.initialize(
            entries
                .iter()
                .map(|(name, count)| Countable::with_count(*name, *count))
                .collect(),
        );
        store
    }
}
