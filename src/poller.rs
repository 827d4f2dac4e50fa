// Timer-driven status poller: fetch a snapshot, reconcile it into the view.
//
// Each poller owns its timer task outright; a page builds one poller per
// cadence (10s dashboard with gauges, 30s list views) instead of sharing
// process-wide timers.

use crate::reconcile::apply_snapshot;
use crate::stats_client::SnapshotSource;
use crate::view::StatusView;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};

/// Cadence and scope for one poller instance.
pub struct PollerConfig {
    pub interval: Duration,
    /// Dashboard pollers refresh the aggregate gauges; list-view pollers
    /// only touch rows.
    pub update_gauges: bool,
}

struct TimerHandle {
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// State shared between the poller handle and its timer task.
struct PollState<S: ?Sized, V: ?Sized> {
    source: Arc<S>,
    view: Arc<Mutex<V>>,
    update_gauges: bool,
    /// Sequence number handed to each issued request.
    issued: AtomicU64,
    /// Highest sequence whose response has been reconciled. Responses that
    /// complete out of order against this watermark are discarded.
    applied: AtomicU64,
}

impl<S, V> PollState<S, V>
where
    S: SnapshotSource + ?Sized,
    V: StatusView + ?Sized,
{
    async fn poll_once(&self) -> bool {
        let seq = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        match self.source.fetch_snapshot().await {
            Ok(snapshot) => {
                let Ok(mut view) = self.view.lock() else {
                    tracing::warn!("view lock poisoned; dropping snapshot");
                    return false;
                };
                // Watermark check happens under the view lock so a stale
                // response can never slip in behind a newer one.
                if !self.advance_applied(seq) {
                    tracing::debug!(seq, "discarding out-of-order snapshot");
                    return false;
                }
                apply_snapshot(&mut *view, &snapshot, self.update_gauges);
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "fetch_snapshot",
                    "stats poll failed; keeping last rendered state"
                );
                false
            }
        }
    }

    fn advance_applied(&self, seq: u64) -> bool {
        let mut current = self.applied.load(Ordering::Acquire);
        loop {
            if seq <= current {
                return false;
            }
            match self
                .applied
                .compare_exchange(current, seq, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}

/// Fire-and-forget soft-refresh poller. Fetch failures are logged and the
/// last rendered state stays up; the fixed-interval timer is the retry.
pub struct Poller<S: ?Sized, V: ?Sized> {
    state: Arc<PollState<S, V>>,
    interval: Duration,
    timer: Mutex<Option<TimerHandle>>,
}

impl<S, V> Poller<S, V>
where
    S: SnapshotSource + ?Sized + 'static,
    V: StatusView + Send + ?Sized + 'static,
{
    pub fn new(source: Arc<S>, view: Arc<Mutex<V>>, config: PollerConfig) -> Self {
        Self {
            state: Arc::new(PollState {
                source,
                view,
                update_gauges: config.update_gauges,
                issued: AtomicU64::new(0),
                applied: AtomicU64::new(0),
            }),
            interval: config.interval,
            timer: Mutex::new(None),
        }
    }

    /// Register the repeating timer. Idempotent: calling this while the
    /// timer task is alive is a no-op. The first tick fires immediately.
    /// Returns whether a new timer task was spawned.
    pub fn start(&self) -> bool {
        let Ok(mut timer) = self.timer.lock() else {
            tracing::warn!("poller timer lock poisoned; not starting");
            return false;
        };
        if let Some(t) = timer.as_ref()
            && !t.handle.is_finished()
        {
            tracing::debug!("poller already running; ignoring start");
            return false;
        }

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let state = Arc::clone(&self.state);
        let period = self.interval;
        let handle = tokio::spawn(async move {
            let mut tick = interval(period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        state.poll_once().await;
                    }
                    _ = &mut shutdown_rx => {
                        tracing::debug!("poller shutting down");
                        break;
                    }
                }
            }
        });
        *timer = Some(TimerHandle {
            shutdown_tx,
            handle,
        });
        true
    }

    /// Cancel the timer task and wait for it to finish. Safe to call when
    /// the poller was never started or is already stopped.
    pub async fn stop(&self) {
        let taken = match self.timer.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => {
                tracing::warn!("poller timer lock poisoned during stop");
                None
            }
        };
        if let Some(TimerHandle {
            shutdown_tx,
            handle,
        }) = taken
        {
            let _ = shutdown_tx.send(());
            let _ = handle.await;
        }
    }

    /// Whether the timer task is currently alive.
    pub fn is_running(&self) -> bool {
        self.timer
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| !t.handle.is_finished()))
            .unwrap_or(false)
    }

    /// One fetch-and-reconcile cycle, outside the timer. Returns true when
    /// the response was applied to the view, false when it failed or was
    /// discarded as stale.
    pub async fn poll_once(&self) -> bool {
        self.state.poll_once().await
    }
}
