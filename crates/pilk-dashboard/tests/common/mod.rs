// crates/pilk-dashboard/tests/common/mod.rs
//
// Scripted `TradingApi` for driving the dashboard without a server.
// Fetches answer with a canned state unless a gate was queued, in which
// case the fetch waits until the test sends the answer through it.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use pilk_client::{ApiError, TradingApi};
use pilk_core::{
    AccountSnapshot, LimitOrderRequest, Position, PositionSide, ServerAck, TradeIntent,
};
use pilk_dashboard::types::SyncEvent;
use pilk_dashboard::Dashboard;
use tokio::sync::oneshot;
use tokio::time::{sleep, timeout};

pub type FetchReply = Result<AccountSnapshot, ApiError>;

pub struct ScriptedApi {
    fetches: AtomicUsize,
    resets: AtomicUsize,
    trades: Mutex<Vec<TradeIntent>>,
    orders: Mutex<Vec<LimitOrderRequest>>,
    fetch_gates: Mutex<VecDeque<oneshot::Receiver<FetchReply>>>,
    // Set by a successful trade, taken by the next fetch to start.
    refresh_due: AtomicBool,
    trade_refreshes: AtomicUsize,
    trade_refresh_gate: Mutex<Option<oneshot::Receiver<FetchReply>>>,
    state: Mutex<FetchReply>,
    action_reply: Mutex<Result<ServerAck, ApiError>>,
}

impl ScriptedApi {
    pub fn new(state: AccountSnapshot) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            resets: AtomicUsize::new(0),
            trades: Mutex::new(Vec::new()),
            orders: Mutex::new(Vec::new()),
            fetch_gates: Mutex::new(VecDeque::new()),
            refresh_due: AtomicBool::new(false),
            trade_refreshes: AtomicUsize::new(0),
            trade_refresh_gate: Mutex::new(None),
            state: Mutex::new(Ok(state)),
            action_reply: Mutex::new(Ok(ok_ack())),
        }
    }

    /// The next fetch that starts waits for the returned sender.
    pub fn gate_next_fetch(&self) -> oneshot::Sender<FetchReply> {
        let (tx, rx) = oneshot::channel();
        self.fetch_gates.lock().unwrap().push_back(rx);
        tx
    }

    /// The refresh that follows the next successful trade waits for the
    /// returned sender.
    pub fn gate_trade_refresh(&self) -> oneshot::Sender<FetchReply> {
        let (tx, rx) = oneshot::channel();
        *self.trade_refresh_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn set_state(&self, reply: FetchReply) {
        *self.state.lock().unwrap() = reply;
    }

    pub fn reject_actions(&self, err: ApiError) {
        *self.action_reply.lock().unwrap() = Err(err);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Fetches that started right after a successful trade.
    pub fn trade_refresh_count(&self) -> usize {
        self.trade_refreshes.load(Ordering::SeqCst)
    }

    /// Fetches issued by the poll timer or a manual refresh.
    pub fn scheduled_fetch_count(&self) -> usize {
        self.fetch_count() - self.trade_refresh_count()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }

    pub fn trades(&self) -> Vec<TradeIntent> {
        self.trades.lock().unwrap().clone()
    }

    pub fn orders(&self) -> Vec<LimitOrderRequest> {
        self.orders.lock().unwrap().clone()
    }

    fn next_gate(&self) -> Option<oneshot::Receiver<FetchReply>> {
        if self.refresh_due.swap(false, Ordering::SeqCst) {
            self.trade_refreshes.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = self.trade_refresh_gate.lock().unwrap().take() {
                return Some(gate);
            }
        }
        self.fetch_gates.lock().unwrap().pop_front()
    }

    fn canned_state(&self) -> FetchReply {
        self.state.lock().unwrap().clone()
    }

    fn canned_action_reply(&self) -> Result<ServerAck, ApiError> {
        self.action_reply.lock().unwrap().clone()
    }
}

impl TradingApi for ScriptedApi {
    async fn fetch_state(&self) -> Result<AccountSnapshot, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.next_gate() {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
            None => self.canned_state(),
        }
    }

    async fn execute_trade(&self, intent: &TradeIntent) -> Result<ServerAck, ApiError> {
        self.trades.lock().unwrap().push(intent.clone());
        let reply = self.canned_action_reply();
        if reply.is_ok() {
            self.refresh_due.store(true, Ordering::SeqCst);
        }
        reply
    }

    async fn place_limit_order(&self, order: &LimitOrderRequest) -> Result<ServerAck, ApiError> {
        self.orders.lock().unwrap().push(order.clone());
        self.canned_action_reply()
    }

    async fn reset_game(&self) -> Result<ServerAck, ApiError> {
        self.resets.fetch_add(1, Ordering::SeqCst);
        self.canned_action_reply()
    }
}

pub fn ok_ack() -> ServerAck {
    ServerAck {
        status: "ok".to_string(),
        balance: None,
    }
}

/// Account with one long per symbol, in the given order.
pub fn snapshot(balance: f64, symbols: &[&str]) -> AccountSnapshot {
    let mut snap = AccountSnapshot {
        balance,
        equity: balance,
        ..AccountSnapshot::default()
    };
    for symbol in symbols {
        let mut pos = Position::new(PositionSide::Long);
        pos.size = Some(1.0);
        pos.entry_price = Some(100.0);
        pos.liq_price = Some(90.0);
        pos.margin = Some(10.0);
        snap.positions.insert(symbol.to_string(), pos);
    }
    snap
}

pub async fn next_event(dash: &mut Dashboard<ScriptedApi>) -> SyncEvent {
    timeout(Duration::from_secs(2), dash.next_event())
        .await
        .expect("event arrived in time")
        .expect("event channel open")
}

/// Apply the next `n` events.
pub async fn settle(dash: &mut Dashboard<ScriptedApi>, n: usize) {
    for _ in 0..n {
        let event = next_event(dash).await;
        dash.apply(event);
    }
}

/// No further event shows up within a short window.
pub async fn assert_quiet(dash: &mut Dashboard<ScriptedApi>) {
    let extra = timeout(Duration::from_millis(100), dash.next_event()).await;
    assert!(extra.is_err(), "unexpected event: {:?}", extra);
}

pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    timeout(Duration::from_secs(2), async {
        while !cond() {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition reached in time");
}
