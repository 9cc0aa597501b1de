//! Wiring between readings, the store and the handlers.
//!
//! The dispatcher owns the [`SensorStore`], subscribes the standard handlers
//! (display, alarm, LED, in that order) and feeds the store from a
//! [`ReadingSource`] until the source runs dry or a stop is requested.

use crate::actuator::ActuatorChannel;
use crate::console::ConsoleSink;
use crate::handlers::{AlarmHandler, DisplayHandler, LedHandler, LedRefresh};
use crate::input::ReadingSource;
use crate::store::SensorStore;
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle that asks a running dispatcher to stop.
///
/// The dispatcher checks it between readings; a reading already being
/// processed is finished first.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Totals for one [`Dispatcher::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub handler_failures: usize,
}

pub struct Dispatcher {
    store: Arc<SensorStore>,
    stop: StopHandle,
}

impl Dispatcher {
    /// Build a store with the display, alarm and LED handlers subscribed.
    pub fn new(
        actuator: Arc<dyn ActuatorChannel>,
        console: Arc<dyn ConsoleSink>,
        led_refresh: LedRefresh,
    ) -> Self {
        let store = Arc::new(SensorStore::new());
        store.subscribe(Arc::new(DisplayHandler::new(console)));
        store.subscribe(Arc::new(AlarmHandler::new(actuator.clone())));
        store.subscribe(Arc::new(LedHandler::with_refresh(actuator, led_refresh)));
        Self::with_store(store)
    }

    /// Drive an already wired store.
    pub fn with_store(store: Arc<SensorStore>) -> Self {
        Self {
            store,
            stop: StopHandle::default(),
        }
    }

    pub fn store(&self) -> &Arc<SensorStore> {
        &self.store
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Pull readings from `source` into the store.
    ///
    /// Returns when the source is exhausted or [`StopHandle::stop`] was
    /// called. Rejected readings and handler failures are counted and the
    /// loop moves on to the next reading.
    pub fn run(&self, source: &mut dyn ReadingSource) -> RunSummary {
        info!(
            "[Dispatcher] Running with {} handler(s)",
            self.store.handler_count()
        );
        let mut summary = RunSummary::default();

        while !self.stop.is_stopped() {
            let Some(reading) = source.next_reading() else {
                info!("[Dispatcher] Input exhausted");
                break;
            };

            match self.store.update(reading) {
                Ok(report) => {
                    summary.accepted += 1;
                    summary.handler_failures += report.failures.len();
                }
                Err(e) => {
                    summary.rejected += 1;
                    warn!("[Dispatcher] Dropped reading: {}", e);
                }
            }
        }

        if self.stop.is_stopped() {
            info!("[Dispatcher] Stop requested");
        }
        summary
    }
}
