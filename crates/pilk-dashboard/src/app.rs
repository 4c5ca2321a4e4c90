// crates/pilk-dashboard/src/app.rs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pilk_client::TradingApi;
use pilk_core::{PositionSide, PositionView};

use crate::dashboard::{Dashboard, DashboardState};
use crate::trade_form::TradeForm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing into the trade form.
    Editing,
    /// Typing a limit price for a limit order on the given side.
    LimitPrice(PositionSide),
    /// Waiting for `y` before resetting the game.
    ConfirmReset,
}

#[derive(Debug, PartialEq)]
pub enum Panel {
    Positions,
    TradeForm,
}

pub struct App<A: TradingApi> {
    pub dashboard: Dashboard<A>,
    pub form: TradeForm,

    // UI state
    pub input_mode: InputMode,
    pub current_panel: Panel,
    pub should_quit: bool,
    pub show_help: bool,

    // Selection state
    pub selected_position: usize,

    // Limit price buffer
    pub input_buffer: String,
}

impl<A: TradingApi> App<A> {
    pub fn new(dashboard: Dashboard<A>, form: TradeForm) -> Self {
        Self {
            dashboard,
            form,
            input_mode: InputMode::Normal,
            current_panel: Panel::Positions,
            should_quit: false,
            show_help: false,
            selected_position: 0,
            input_buffer: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::Editing => self.handle_editing_key(key.code),
            InputMode::LimitPrice(side) => self.handle_price_key(side, key.code),
            InputMode::ConfirmReset => {
                if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    self.dashboard.reset_game();
                }
                self.input_mode = InputMode::Normal;
            }
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab => self.next_panel(),
            KeyCode::BackTab => self.prev_panel(),

            // Trading hotkeys
            KeyCode::Char('b') => self.open_long(),
            KeyCode::Char('s') => self.open_short(),
            KeyCode::Char('B') => self.start_limit_order(PositionSide::Long),
            KeyCode::Char('S') => self.start_limit_order(PositionSide::Short),
            KeyCode::Char('c') | KeyCode::Delete => self.close_selected_position(),
            KeyCode::Char('R') => self.input_mode = InputMode::ConfirmReset,
            KeyCode::Char('r') => {
                self.dashboard.refresh();
            }

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),

            // Form editing
            KeyCode::Enter | KeyCode::Char('e') => self.start_editing(),

            KeyCode::F(1) | KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('x') => self.dashboard.dismiss_notice(),

            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Char(c) => self.form.enter_char(c),
            _ => {}
        }
    }

    fn handle_price_key(&mut self, side: PositionSide, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_limit_order(side),
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => self.input_buffer.push(c),
            _ => {}
        }
    }

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Positions => Panel::TradeForm,
            Panel::TradeForm => Panel::Positions,
        };
    }

    pub fn prev_panel(&mut self) {
        // Only two panels for now.
        self.next_panel();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn start_editing(&mut self) {
        self.current_panel = Panel::TradeForm;
        self.input_mode = InputMode::Editing;
    }

    pub fn open_long(&mut self) {
        let intent = self.form.open_long();
        self.dashboard.submit_trade(intent);
    }

    pub fn open_short(&mut self) {
        let intent = self.form.open_short();
        self.dashboard.submit_trade(intent);
    }

    pub fn start_limit_order(&mut self, side: PositionSide) {
        self.input_mode = InputMode::LimitPrice(side);
        self.input_buffer.clear();
    }

    /// Unparseable price text goes out as `0`; the server rejects it.
    pub fn submit_limit_order(&mut self, side: PositionSide) {
        let price = self.input_buffer.parse::<f64>().unwrap_or(0.0);
        let order = self.form.limit_order(side, price);
        self.dashboard.place_limit_order(order);
        self.cancel_input();
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Map key of the highlighted position, if the snapshot has one.
    pub fn selected_position_key(&self) -> Option<String> {
        match self.dashboard.state() {
            DashboardState::Ready(snapshot) => {
                let last = snapshot.positions.len().checked_sub(1)?;
                snapshot
                    .position_key(self.selected_position.min(last))
                    .map(str::to_string)
            }
            DashboardState::Loading => None,
        }
    }

    pub fn close_selected_position(&mut self) {
        if let Some(key) = self.selected_position_key() {
            self.dashboard.close_position(&key);
        }
    }

    pub fn move_selection_up(&mut self) {
        self.clamp_selection();
        self.selected_position = self.selected_position.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        self.clamp_selection();
        if self.selected_position + 1 < self.position_count() {
            self.selected_position += 1;
        }
    }

    /// Keep the highlight on a row that exists; positions come and go
    /// between snapshots.
    pub fn clamp_selection(&mut self) {
        let count = self.position_count();
        self.selected_position = self.selected_position.min(count.saturating_sub(1));
    }

    fn position_count(&self) -> usize {
        match self.dashboard.state() {
            DashboardState::Ready(snapshot) => snapshot.positions.len(),
            DashboardState::Loading => 0,
        }
    }

    /// Display rows for the current snapshot, in server order.
    pub fn position_views(&self) -> Vec<PositionView> {
        match self.dashboard.state() {
            DashboardState::Ready(snapshot) => snapshot
                .positions
                .iter()
                .map(|(key, pos)| PositionView::from_position(key, pos))
                .collect(),
            DashboardState::Loading => Vec::new(),
        }
    }
}
