//! Event dispatcher
//!
//! Pulls events off the bus and hands each one to every extension of an
//! application. Every extension has its own bounded queue drained by a
//! worker on tokio's blocking pool: an extension sees events in bus order,
//! and a handler that blocks (e.g. sends an order) only holds up its own
//! queue. Events the bus overwrote before they were read, and deliveries
//! refused by a full queue, are counted in `DispatchStats`.

use hive_core::Event;
use hive_gateway::{Subscriber, TransportError};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::application::Application;
use crate::extension::Deliver;

const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Counters reported when the dispatcher stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Events taken off the bus
    pub events: u64,
    /// Events the bus overwrote before the dispatcher read them
    pub dropped: u64,
    /// Deliveries refused because an extension's queue was full
    pub overflowed: u64,
    /// Successful handler invocations
    pub deliveries: u64,
    /// Handler errors and panics
    pub failures: u64,
}

/// Outcome counts of one extension worker
#[derive(Debug, Default)]
struct WorkerTally {
    deliveries: u64,
    failures: u64,
}

struct Worker {
    extension: Arc<dyn Deliver>,
    tx: mpsc::Sender<Arc<Event>>,
    handle: JoinHandle<WorkerTally>,
}

impl Worker {
    fn spawn(app_name: String, extension: Arc<dyn Deliver>, capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<Arc<Event>>(capacity);
        let handler = Arc::clone(&extension);
        let handle = tokio::task::spawn_blocking(move || {
            let mut tally = WorkerTally::default();
            while let Some(event) = rx.blocking_recv() {
                match catch_unwind(AssertUnwindSafe(|| handler.deliver(&event))) {
                    Ok(Ok(())) => tally.deliveries += 1,
                    Ok(Err(e)) => {
                        tally.failures += 1;
                        warn!(
                            "[{}] {} failed on {} event: {}",
                            app_name,
                            handler.name(),
                            event.kind(),
                            e
                        );
                    }
                    Err(_) => {
                        tally.failures += 1;
                        error!(
                            "[{}] {} panicked on {} event",
                            app_name,
                            handler.name(),
                            event.kind()
                        );
                    }
                }
            }
            tally
        });
        Self {
            extension,
            tx,
            handle,
        }
    }

    fn serves(&self, extension: &Arc<dyn Deliver>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.extension), Arc::as_ptr(extension))
    }
}

/// Fans bus events out to the extensions of one application
pub struct EventDispatcher {
    app: Arc<Application>,
    queue_capacity: usize,
}

impl EventDispatcher {
    pub fn new(app: Arc<Application>) -> Self {
        Self {
            app,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Per-extension queue length (at least 1)
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Run until the bus closes
    pub async fn run<S>(self, source: S) -> DispatchStats
    where
        S: Subscriber<Event>,
    {
        self.run_until(source, std::future::pending()).await
    }

    /// Run until the bus closes or `shutdown` resolves
    ///
    /// Deliveries already queued are completed before the stats are returned.
    pub async fn run_until<S, F>(self, mut source: S, shutdown: F) -> DispatchStats
    where
        S: Subscriber<Event>,
        F: Future<Output = ()>,
    {
        let mut stats = DispatchStats::default();
        let mut workers: HashMap<String, Worker> = HashMap::new();
        let mut retired: Vec<JoinHandle<WorkerTally>> = Vec::new();
        tokio::pin!(shutdown);
        info!("[{}] Event dispatcher started", self.app.name());

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("[{}] Event dispatcher shutting down", self.app.name());
                    break;
                }
                result = source.next() => {
                    match result {
                        Ok(event) => {
                            self.sync_workers(&mut workers, &mut retired);
                            self.fan_out(event, &workers, &mut stats);
                        }
                        Err(TransportError::Lagged(n)) => {
                            stats.dropped += n;
                            warn!(
                                "[{}] Event bus overran the dispatcher, {} events lost",
                                self.app.name(),
                                n
                            );
                        }
                        Err(TransportError::ChannelClosed) => {
                            info!("[{}] Event bus closed", self.app.name());
                            break;
                        }
                        Err(e) => {
                            error!("[{}] Event bus error: {}", self.app.name(), e);
                            break;
                        }
                    }
                }
            }
        }

        // Closing every queue lets the workers drain and exit
        retired.extend(workers.into_values().map(|w| w.handle));
        for handle in retired {
            match handle.await {
                Ok(tally) => {
                    stats.deliveries += tally.deliveries;
                    stats.failures += tally.failures;
                }
                Err(e) => error!("[{}] Extension worker failed: {}", self.app.name(), e),
            }
        }

        info!(
            "[{}] Event dispatcher stopped: {} events ({} dropped, {} overflowed), {} deliveries, {} failures",
            self.app.name(),
            stats.events,
            stats.dropped,
            stats.overflowed,
            stats.deliveries,
            stats.failures
        );
        stats
    }

    /// Match workers to the extensions currently installed
    ///
    /// New or replaced extensions get a fresh worker; the workers of removed
    /// or replaced ones are closed and finish what they already queued.
    fn sync_workers(
        &self,
        workers: &mut HashMap<String, Worker>,
        retired: &mut Vec<JoinHandle<WorkerTally>>,
    ) {
        let installed = self.app.extension_handles();

        let stale: Vec<String> = workers
            .iter()
            .filter(|(name, worker)| {
                !installed
                    .iter()
                    .any(|e| e.name() == name.as_str() && worker.serves(e))
            })
            .map(|(name, _)| name.clone())
            .collect();
        for name in stale {
            if let Some(worker) = workers.remove(&name) {
                debug!("[{}] Closing worker of {}", self.app.name(), name);
                retired.push(worker.handle);
            }
        }

        for extension in installed {
            if !workers.contains_key(extension.name()) {
                debug!("[{}] Starting worker for {}", self.app.name(), extension.name());
                let name = extension.name().to_string();
                let worker =
                    Worker::spawn(self.app.name().to_string(), extension, self.queue_capacity);
                workers.insert(name, worker);
            }
        }
    }

    fn fan_out(&self, event: Event, workers: &HashMap<String, Worker>, stats: &mut DispatchStats) {
        stats.events += 1;
        let event = Arc::new(event);

        for (name, worker) in workers {
            match worker.tx.try_send(Arc::clone(&event)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    stats.overflowed += 1;
                    warn!(
                        "[{}] Queue of {} is full, {} event not delivered",
                        self.app.name(),
                        name,
                        event.kind()
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    stats.failures += 1;
                    error!("[{}] Worker of {} is gone", self.app.name(), name);
                }
            }
        }
    }
}
