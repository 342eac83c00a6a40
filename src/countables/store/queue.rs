//! Background save worker.
//!
//! [`QueuedGateway`] makes `save` fire-and-forget: the caller hands over a
//! snapshot and returns immediately, one worker thread does the writing.
//!
//! Ordering: snapshots are written in call order by a single thread. If more
//! saves arrive while a write is in flight, only the newest pending snapshot
//! is kept. A stale snapshot can therefore never be written after a newer
//! one, whatever the write latency.
//!
//! ```text
//! save(s1) save(s2) save(s3)          worker
//!    │        │        │
//!    └─► pending = s1                 write(s1) ...
//!             └─► pending = s2
//!                      └─► pending = s3
//!                                     write(s3)   (s2 is superseded)
//! ```

use super::PersistenceGateway;
use crate::error::{CountablesError, Result};
use crate::model::Countable;
use parking_lot::{Condvar, Mutex};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

#[derive(Default)]
struct QueueState {
    pending: Option<(u64, Vec<Countable>)>,
    next_seq: u64,
    written_seq: u64,
    in_flight: bool,
    shutdown: bool,
    failed_saves: usize,
    last_error: Option<String>,
}

struct Shared {
    state: Mutex<QueueState>,
    /// Signals the worker: new snapshot or shutdown.
    work: Condvar,
    /// Signals waiters in `flush`: the worker finished a write.
    idle: Condvar,
}

pub struct QueuedGateway<G: PersistenceGateway + Send + Sync + 'static> {
    inner: Arc<G>,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl<G: PersistenceGateway + Send + Sync + 'static> QueuedGateway<G> {
    pub fn new(inner: G) -> Result<Self> {
        let inner = Arc::new(inner);
        let shared = Arc::new(Shared {
            state: Mutex::new(QueueState::default()),
            work: Condvar::new(),
            idle: Condvar::new(),
        });

        let worker = {
            let inner = Arc::clone(&inner);
            let shared = Arc::clone(&shared);
            thread::Builder::new()
                .name("countables-save".to_string())
                .spawn(move || run_save_loop(inner.as_ref(), &shared))
                .map_err(CountablesError::Io)?
        };

        Ok(Self {
            inner,
            shared,
            worker: Some(worker),
        })
    }

    /// Block until every save issued so far has been written (or has failed).
    pub fn flush(&self) {
        let mut state = self.shared.state.lock();
        while state.pending.is_some() || state.in_flight {
            self.shared.idle.wait(&mut state);
        }
    }

    /// Sequence number of the last snapshot the worker finished with.
    pub fn written_seq(&self) -> u64 {
        self.shared.state.lock().written_seq
    }

    pub fn failed_saves(&self) -> usize {
        self.shared.state.lock().failed_saves
    }

    pub fn last_error(&self) -> Option<String> {
        self.shared.state.lock().last_error.clone()
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: PersistenceGateway + Send + Sync + 'static> PersistenceGateway for QueuedGateway<G> {
    fn load(&self) -> Vec<Countable> {
        self.flush();
        self.inner.load()
    }

    fn save(&self, collection: &[Countable]) -> Result<()> {
        let mut state = self.shared.state.lock();
        if state.shutdown {
            return Err(CountablesError::Store("Save queue is shut down".to_string()));
        }
        state.next_seq += 1;
        let seq = state.next_seq;
        if let Some((stale, _)) = state.pending.replace((seq, collection.to_vec())) {
            debug!(stale, seq, "superseded pending save");
        }
        self.shared.work.notify_one();
        Ok(())
    }
}

impl<G: PersistenceGateway + Send + Sync + 'static> Drop for QueuedGateway<G> {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
            self.shared.work.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("save worker panicked");
            }
        }
    }
}

fn run_save_loop<G: PersistenceGateway>(inner: &G, shared: &Shared) {
    let mut state = shared.state.lock();
    loop {
        if let Some((seq, snapshot)) = state.pending.take() {
            state.in_flight = true;
            drop(state);

            // A panicking gateway must still clear `in_flight`, or `flush` never returns.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| inner.save(&snapshot)))
                .unwrap_or_else(|_| {
                    Err(CountablesError::Store("Save panicked".to_string()))
                });

            state = shared.state.lock();
            state.in_flight = false;
            state.written_seq = seq;
            match outcome {
                Ok(()) => debug!(seq, entries = snapshot.len(), "queued save written"),
                Err(e) => {
                    warn!(seq, error = %e, "queued save failed");
                    state.failed_saves += 1;
                    state.last_error = Some(e.to_string());
                }
            }
            shared.idle.notify_all();
            continue;
        }

        if state.shutdown {
            break;
        }
        shared.work.wait(&mut state);
    }
}
