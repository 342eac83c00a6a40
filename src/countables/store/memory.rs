use super::{decode, encode, PersistenceGateway};
use crate::error::{CountablesError, Result};
use crate::model::Countable;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

#[derive(Default)]
struct MemState {
    raw: Option<String>,
    saves: usize,
    simulate_write_error: bool,
}

/// In-memory gateway for testing and development.
/// Does NOT persist data beyond the process.
///
/// Clones share the same underlying snapshot, so a test can hand one handle
/// to the code under test and inspect the other.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<Mutex<MemState>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that already holds `collection`, as if saved earlier.
    pub fn with_snapshot(collection: &[Countable]) -> Self {
        let gateway = Self::new();
        gateway.state.lock().raw = encode(collection, false).ok();
        gateway
    }

    /// Replace the stored text verbatim, e.g. with something unparseable.
    pub fn set_raw(&self, raw: impl Into<String>) {
        self.state.lock().raw = Some(raw.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.state.lock().raw.clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.state.lock().saves
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.state.lock().simulate_write_error = simulate;
    }
}

impl PersistenceGateway for InMemoryGateway {
    fn load(&self) -> Vec<Countable> {
        let state = self.state.lock();
        match state.raw.as_deref() {
            None => Vec::new(),
            Some(raw) => decode(raw).unwrap_or_else(|e| {
                warn!(error = %e, "unreadable in-memory snapshot, starting empty");
                Vec::new()
            }),
        }
    }

    fn save(&self, collection: &[Countable]) -> Result<()> {
        let mut state = self.state.lock();
        if state.simulate_write_error {
            return Err(CountablesError::Store("Simulated write error".to_string()));
        }
        state.raw = Some(encode(collection, false)?);
        state.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_saved() {
        let gateway = InMemoryGateway::new();
        assert!(gateway.load().is_empty());
        assert_eq!(gateway.save_count(), 0);
    }

    #[test]
    fn round_trip_preserves_order_and_values() {
        let gateway = InMemoryGateway::new();
        let collection = vec![Countable::with_count("B", 4), Countable::new("A")];
        gateway.save(&collection).unwrap();
        assert_eq!(gateway.load(), collection);
        assert_eq!(gateway.save_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let gateway = InMemoryGateway::new();
        let handle = gateway.clone();
        gateway.save(&[Countable::new("Crow")]).unwrap();
        assert_eq!(handle.load(), vec![Countable::new("Crow")]);
    }

    #[test]
    fn garbage_loads_empty() {
        let gateway = InMemoryGateway::new();
        gateway.set_raw("definitely not json");
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn simulated_write_error_keeps_previous_snapshot() {
        let gateway = InMemoryGateway::with_snapshot(&[Countable::new("Crow")]);
        gateway.set_simulate_write_error(true);
        assert!(gateway.save(&[]).is_err());
        assert_eq!(gateway.load(), vec![Countable::new("Crow")]);
    }
}
