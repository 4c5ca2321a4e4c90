//! The dashboard orchestrator.
//!
//! Owns the poll loop, the latest account snapshot and the outcome of the
//! last user action. Network work runs on spawned tasks that post
//! [`SyncEvent`]s back; state only changes in [`Dashboard::apply`], which
//! the UI loop calls from one place.
//!
//! Rules:
//! - `Loading` until the first successful fetch, `Ready` forever after.
//! - A failed fetch is logged and changes nothing (stale but available).
//! - Snapshots are applied by issue order, see [`FetchSequencer`].
//! - A successful mutating call is followed by exactly one extra fetch.
//!   A failed one surfaces a notice and leaves the snapshot alone.
//! - After `stop_polling` every late event is dropped.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Local};
use pilk_client::{ApiError, TradingApi};
use pilk_core::{
    AccountSnapshot, FetchSequencer, LimitOrderRequest, ServerAck, SnapshotSlot, TradeIntent,
};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, error, info, warn};

use crate::poller::{self, PollHandle};
use crate::types::{Action, EventRx, EventTx, Notice, SyncEvent};

/// What the view should show.
#[derive(Debug, Clone, Copy)]
pub enum DashboardState<'a> {
    Loading,
    Ready(&'a AccountSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Polling,
    TornDown,
}

pub struct Dashboard<A: TradingApi> {
    api: Arc<A>,
    poll_period: Duration,
    sequencer: FetchSequencer,
    snapshot: SnapshotSlot<AccountSnapshot>,
    lifecycle: Lifecycle,
    poller: Option<PollHandle>,

    events_tx: EventTx,
    events_rx: EventRx,

    notice: Option<Notice>,
    last_refresh: Option<DateTime<Local>>,
    pending_actions: usize,
}

impl<A: TradingApi> Dashboard<A> {
    pub fn new(api: Arc<A>, poll_period: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            api,
            poll_period,
            sequencer: FetchSequencer::new(),
            snapshot: SnapshotSlot::new(),
            lifecycle: Lifecycle::Idle,
            poller: None,
            events_tx,
            events_rx,
            notice: None,
            last_refresh: None,
            pending_actions: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Polling lifecycle
    // ---------------------------------------------------------------------

    /// Start the periodic refresh. Call once, when the view comes up.
    pub fn start_polling(&mut self) {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.poller = Some(PollHandle::spawn(
                    Arc::clone(&self.api),
                    self.poll_period,
                    self.sequencer.clone(),
                    self.events_tx.clone(),
                ));
                self.lifecycle = Lifecycle::Polling;
            }
            Lifecycle::Polling => warn!("start_polling called while already polling"),
            Lifecycle::TornDown => warn!("start_polling called after teardown"),
        }
    }

    /// Stop the periodic refresh and tear the dashboard down. Anything
    /// still in flight is discarded when it lands.
    pub fn stop_polling(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            warn!("stop_polling called twice");
            return;
        }
        if let Some(handle) = self.poller.take() {
            handle.stop();
        }
        self.lifecycle = Lifecycle::TornDown;
        info!("dashboard torn down");
    }

    pub fn is_polling(&self) -> bool {
        self.lifecycle == Lifecycle::Polling
            && self.poller.as_ref().is_some_and(|p| !p.is_finished())
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    // ---------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------

    /// One fetch outside the timer. Returns its sequence number.
    pub fn refresh(&self) -> u64 {
        poller::spawn_fetch(Arc::clone(&self.api), &self.sequencer, self.events_tx.clone())
    }

    /// Execute an immediate trade (open or close).
    pub fn submit_trade(&mut self, intent: TradeIntent) {
        let action = match intent.action.opening_side() {
            Some(side) => Action::Open {
                symbol: intent.symbol.clone(),
                side,
            },
            None => Action::Close {
                symbol: intent.symbol.clone(),
            },
        };
        info!(symbol = %intent.symbol, action = intent.action.as_str(), "submitting trade");

        self.dispatch(action, move |api| async move { api.execute_trade(&intent).await });
    }

    pub fn close_position(&mut self, symbol: &str) {
        self.submit_trade(TradeIntent::close(symbol));
    }

    pub fn place_limit_order(&mut self, order: LimitOrderRequest) {
        let action = Action::LimitOrder {
            symbol: order.symbol.clone(),
            side: order.side,
            price: order.price,
        };
        info!(symbol = %order.symbol, side = order.side.as_str(), price = order.price, "placing limit order");

        self.dispatch(action, move |api| async move { api.place_limit_order(&order).await });
    }

    pub fn reset_game(&mut self) {
        info!("resetting game");
        self.dispatch(Action::Reset, |api| async move { api.reset_game().await });
    }

    /// Run one mutating call on its own task. On success the same task
    /// issues the follow-up fetch, so exactly one extra fetch happens.
    fn dispatch<F, Fut>(&mut self, action: Action, call: F)
    where
        F: FnOnce(Arc<A>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<ServerAck, ApiError>> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let sequencer = self.sequencer.clone();
        let events = self.events_tx.clone();
        self.pending_actions += 1;

        tokio::spawn(async move {
            let result = call(Arc::clone(&api)).await;
            let succeeded = result.is_ok();

            if events.send(SyncEvent::ActionSettled { action, result }).is_err() {
                return;
            }
            if succeeded {
                let seq = sequencer.issue();
                poller::fetch_into(api.as_ref(), seq, &events).await;
            }
        });
    }

    // ---------------------------------------------------------------------
    // Event application
    // ---------------------------------------------------------------------

    /// Apply one event. Returns `true` if the view needs redrawing.
    pub fn apply(&mut self, event: SyncEvent) -> bool {
        if let SyncEvent::ActionSettled { .. } = event {
            self.pending_actions = self.pending_actions.saturating_sub(1);
        }

        if self.lifecycle == Lifecycle::TornDown {
            debug!("dropping event after teardown");
            return false;
        }

        match event {
            SyncEvent::Fetched { seq, result: Ok(snapshot) } => {
                if self.snapshot.offer(seq, snapshot) {
                    self.last_refresh = Some(Local::now());
                    true
                } else {
                    debug!(
                        seq,
                        applied = self.snapshot.applied_seq(),
                        latest = self.sequencer.last_issued(),
                        "dropping stale snapshot"
                    );
                    false
                }
            }
            SyncEvent::Fetched { seq, result: Err(err) } => {
                warn!(seq, error = %err, "state fetch failed, keeping previous snapshot");
                false
            }
            SyncEvent::ActionSettled { action, result: Ok(ack) } => {
                let message = action.success_message(&ack);
                info!(status = %ack.status, "{}", message);
                self.notice = Some(Notice::info(message));
                true
            }
            SyncEvent::ActionSettled { action, result: Err(err) } => {
                let message = action.failure_message(&err);
                if err.is_rejection() {
                    warn!("{}", message);
                } else {
                    error!(error = ?err, "{}", message);
                }
                self.notice = Some(Notice::error(message));
                true
            }
        }
    }

    /// Apply everything queued without waiting. Returns `true` if any
    /// event changed what is on screen.
    pub fn drain(&mut self) -> bool {
        let mut dirty = false;
        while let Ok(event) = self.events_rx.try_recv() {
            dirty |= self.apply(event);
        }
        dirty
    }

    /// Wait for the next event without applying it.
    pub async fn next_event(&mut self) -> Option<SyncEvent> {
        self.events_rx.recv().await
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn state(&self) -> DashboardState<'_> {
        match self.snapshot.get() {
            Some(snapshot) => DashboardState::Ready(snapshot),
            None => DashboardState::Loading,
        }
    }

    pub fn snapshot(&self) -> Option<&AccountSnapshot> {
        self.snapshot.get()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    /// Mutating calls sent but not yet settled.
    pub fn pending_actions(&self) -> usize {
        self.pending_actions
    }

    pub fn poll_period(&self) -> Duration {
        self.poll_period
    }
}

impl<A: TradingApi> Drop for Dashboard<A> {
    fn drop(&mut self) {
        if self.lifecycle != Lifecycle::TornDown {
            self.stop_polling();
        }
    }
}
