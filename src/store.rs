//! Sensor store with synchronous handler notification.
//!
//! The store keeps the latest reading per sensor kind and notifies every
//! subscribed [`SensorHandler`] after each accepted update.
//!
//! ## Update semantics
//!
//! 1. The reading is validated; invalid readings change nothing and notify
//!    nobody.
//! 2. The update lock is taken. Only one update runs at a time, from the
//!    mutation until the last handler returns.
//! 3. The reading replaces any previous reading of its kind and a copy of
//!    the resulting snapshot is taken.
//! 4. Handlers are called in subscription order with that copy and the
//!    reading. A handler that fails or panics is recorded in the
//!    [`UpdateReport`] and the remaining handlers still run.
//!
//! Handler I/O runs inside the update lock, so a handler that blocks stalls
//! every later update. Handlers may call [`SensorStore::snapshot_all`] and
//! [`SensorStore::subscribe`] while being notified, but must not call
//! [`SensorStore::update`] (it would deadlock on the update lock).

use crate::error::{HandlerError, InvalidReadingError};
use crate::handlers::SensorHandler;
use crate::sensors::{Reading, Snapshot};
use log::{debug, warn};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// A handler that did not complete its reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerFailure {
    pub handler: String,
    pub error: HandlerError,
}

/// Outcome of one accepted update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    /// Number of handlers that were called.
    pub notified: usize,
    pub failures: Vec<HandlerFailure>,
}

impl UpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct SensorStore {
    update_lock: Mutex<()>,
    snapshot: RwLock<Snapshot>,
    handlers: RwLock<Vec<Arc<dyn SensorHandler>>>,
    version: AtomicU32,
}

impl SensorStore {
    pub fn new() -> Self {
        Self {
            update_lock: Mutex::new(()),
            snapshot: RwLock::new(Snapshot::new()),
            handlers: RwLock::new(Vec::new()),
            version: AtomicU32::new(0),
        }
    }

    /// Append a handler to the notification list.
    ///
    /// Duplicates are allowed; a handler subscribed twice is notified twice.
    /// A handler subscribed during a notification sees the next update.
    pub fn subscribe(&self, handler: Arc<dyn SensorHandler>) {
        debug!("[Store] Subscribing handler '{}'", handler.name());
        self.handlers.write().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Copy of the current readings.
    pub fn snapshot_all(&self) -> Snapshot {
        self.snapshot.read().clone()
    }

    /// Number of accepted updates so far.
    pub fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }

    /// Store a reading and notify every handler.
    ///
    /// Returns only after all handlers have finished. Rejected readings
    /// leave the store untouched.
    pub fn update(&self, reading: Reading) -> Result<UpdateReport, InvalidReadingError> {
        if let Err(e) = reading.validate() {
            warn!("[Store] Rejected reading: {}", e);
            return Err(e);
        }

        let _serialized = self.update_lock.lock();

        let snapshot = {
            let mut current = self.snapshot.write();
            current.insert(reading.clone());
            current.clone()
        };
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("[Store] v{} {}", version, reading);

        let handlers: Vec<Arc<dyn SensorHandler>> = self.handlers.read().clone();
        let mut report = UpdateReport::default();

        for handler in &handlers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                handler.on_update(&snapshot, &reading)
            }))
            .unwrap_or_else(|payload| Err(HandlerError::Panicked(panic_message(payload.as_ref()))));
            report.notified += 1;

            if let Err(error) = outcome {
                warn!(
                    "[Store] Handler '{}' failed on {}: {}",
                    handler.name(),
                    reading,
                    error
                );
                report.failures.push(HandlerFailure {
                    handler: handler.name().to_string(),
                    error,
                });
            }
        }

        Ok(report)
    }
}

impl Default for SensorStore {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
