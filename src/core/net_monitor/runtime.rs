//! Tokio runtime and single-writer aggregation task.
//!
//! The aggregator runs as one task consuming a command channel, so every
//! event and reset is applied in delivery order without locks. Consumers get
//! an immutable `Arc` snapshot through a watch channel and can await it for
//! change notifications.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use super::adapter::{domain_of, feed_task, FeedSource};
use super::aggregator::Aggregator;
use super::metrics::{RawObservation, TelemetrySnapshot};

/// Source of observation timestamps.
///
/// Events are stamped when the aggregator applies them (delivery time), not
/// with any timestamp the feed may carry.
pub trait Clock: Send + 'static {
    fn now_ms(&self) -> i64;
}

/// Wall clock used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Commands applied by the aggregator task, in delivery order.
#[derive(Debug, Clone)]
pub enum MonitorCommand {
    /// One raw entry from the observation feed
    Observe(RawObservation),
    /// Discard the whole session state
    Reset,
}

/// Wrapper around the Tokio runtime for telemetry collection.
///
/// Owns the feed and aggregator tasks; dropping it (after `shutdown`) tears
/// both down and discards anything still queued on the command channel.
pub struct TelemetryRuntime {
    /// Receiver for telemetry snapshots
    pub snapshot_rx: watch::Receiver<Arc<TelemetrySnapshot>>,

    /// Sender for aggregator commands
    command_tx: mpsc::Sender<MonitorCommand>,

    /// Shutdown signal sender
    shutdown_tx: broadcast::Sender<()>,

    /// Handle to the runtime (for shutdown)
    _runtime_handle: tokio::runtime::Runtime,
}

impl TelemetryRuntime {
    /// Create a new TelemetryRuntime observing `source` with the wall clock.
    pub fn new(source: FeedSource) -> anyhow::Result<Self> {
        Self::with_clock(source, SystemClock)
    }

    /// Create a new TelemetryRuntime with an injected clock.
    pub fn with_clock<C: Clock>(source: FeedSource, clock: C) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("telemetry-worker")
            .build()?;

        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(TelemetrySnapshot::default()));
        let (command_tx, command_rx) = mpsc::channel::<MonitorCommand>(256);
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        runtime.spawn(aggregator_task(
            command_rx,
            snapshot_tx,
            clock,
            shutdown_tx.subscribe(),
        ));

        runtime.spawn(feed_task(
            source,
            command_tx.clone(),
            shutdown_tx.subscribe(),
        ));

        Ok(Self {
            snapshot_rx,
            command_tx,
            shutdown_tx,
            _runtime_handle: runtime,
        })
    }

    /// Cloneable consumer handle: snapshot subscription plus reset.
    pub fn handle(&self) -> TelemetryHandle {
        TelemetryHandle {
            command_tx: self.command_tx.clone(),
            snapshot_rx: self.snapshot_rx.clone(),
        }
    }

    /// Shutdown the runtime gracefully.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        // Runtime will shutdown when dropped
    }
}

/// Handle given to consumers of the telemetry state.
#[derive(Debug, Clone)]
pub struct TelemetryHandle {
    command_tx: mpsc::Sender<MonitorCommand>,
    pub snapshot_rx: watch::Receiver<Arc<TelemetrySnapshot>>,
}

impl TelemetryHandle {
    /// Latest published snapshot.
    pub fn latest(&self) -> Arc<TelemetrySnapshot> {
        self.snapshot_rx.borrow().clone()
    }

    /// Request a session reset.
    ///
    /// The request travels the same channel as observations, so the single
    /// writer applies it between events and no partially-cleared snapshot is
    /// ever published.
    pub fn reset(&self) {
        if self.command_tx.try_send(MonitorCommand::Reset).is_err() {
            log::warn!("Telemetry command channel full; reset dropped");
        }
    }
}

/// Single-writer task: applies commands in order and publishes a fresh
/// snapshot after every accepted mutation.
async fn aggregator_task<C: Clock>(
    mut command_rx: mpsc::Receiver<MonitorCommand>,
    snapshot_tx: watch::Sender<Arc<TelemetrySnapshot>>,
    clock: C,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut aggregator = Aggregator::new();

    loop {
        tokio::select! {
            Some(command) = command_rx.recv() => {
                match command {
                    MonitorCommand::Observe(entry) => {
                        // Malformed entries were already logged by the
                        // adapter; dropped ones publish nothing
                        let Some(domain) = domain_of(&entry) else {
                            continue;
                        };
                        aggregator.record_event(&domain, clock.now_ms());
                    }
                    MonitorCommand::Reset => aggregator.reset(),
                }

                // watch::send() only fails if there are no receivers (which is fine)
                let _ = snapshot_tx.send(Arc::new(aggregator.snapshot()));
            }
            _ = shutdown.recv() => break,
        }
    }
}
