// crates/pilk-dashboard/src/poller.rs

use std::sync::Arc;

use pilk_client::TradingApi;
use pilk_core::FetchSequencer;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::types::{EventTx, SyncEvent};

/// Owned handle on the running poll loop.
///
/// Every tick issues its fetch on a task of its own, so a slow or hung
/// request never delays the next tick. `stop` cancels future ticks only:
/// fetches already in flight run to completion and their results are
/// still posted. Dropping the handle stops the loop the same way.
pub struct PollHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Spawn the loop. The first tick fires immediately.
    pub fn spawn<A: TradingApi>(
        api: Arc<A>,
        period: Duration,
        sequencer: FetchSequencer,
        events: EventTx,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(poll_loop(api, period, sequencer, events, shutdown_rx));
        Self {
            shutdown: Some(shutdown_tx),
            task,
        }
    }

    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn poll_loop<A: TradingApi>(
    api: Arc<A>,
    period: Duration,
    sequencer: FetchSequencer,
    events: EventTx,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(period_ms = period.as_millis() as u64, "poll loop started");

    loop {
        tokio::select! {
            // Fires on an explicit stop and when the handle is dropped.
            _ = &mut shutdown => {
                break;
            }

            _ = ticker.tick() => {
                if events.is_closed() {
                    break;
                }
                spawn_fetch(Arc::clone(&api), &sequencer, events.clone());
            }
        }
    }

    info!("poll loop stopped");
}

/// One state fetch, stamped with `seq`, posted to `events`.
pub async fn fetch_into<A: TradingApi>(api: &A, seq: u64, events: &EventTx) {
    let result = api.fetch_state().await;
    debug!(seq, ok = result.is_ok(), "state fetch finished");
    if events.send(SyncEvent::Fetched { seq, result }).is_err() {
        debug!(seq, "dashboard gone, dropping fetch result");
    }
}

/// One fetch on its own task. The sequence number is taken now, before
/// the request goes out.
pub fn spawn_fetch<A: TradingApi>(api: Arc<A>, sequencer: &FetchSequencer, events: EventTx) -> u64 {
    let seq = sequencer.issue();
    tokio::spawn(async move {
        fetch_into(api.as_ref(), seq, &events).await;
    });
    seq
}
