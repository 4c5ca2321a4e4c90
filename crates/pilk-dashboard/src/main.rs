// crates/pilk-dashboard/src/main.rs

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::{io, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pilk_client::{ApiClient, TradingApi};
use pilk_dashboard::app::App;
use pilk_dashboard::config::DashboardConfig;
use pilk_dashboard::{ui, Dashboard};

#[derive(Parser)]
#[clap(name = "pilk-dashboard")]
#[clap(about = "Terminal dashboard for the PILK leveraged trading game")]
struct Cli {
    /// Base URL of the game API (including /api)
    #[clap(short, long)]
    api_url: Option<String>,

    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Seconds between state refreshes
    #[clap(short, long)]
    poll_secs: Option<u64>,

    /// Symbol preset in the trade form
    #[clap(short = 'y', long)]
    symbol: Option<String>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Where log lines go (the terminal is taken by the UI)
    #[clap(long, default_value = "pilk-dashboard.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(secs) = cli.poll_secs {
        config.poll_interval_secs = secs;
    }
    if let Some(symbol) = cli.symbol {
        config.default_symbol = symbol;
    }
    config.validate()?;

    init_logging(&cli.log_file, cli.debug)?;
    info!(api_url = %config.api_url, poll_secs = config.poll_interval_secs, "starting dashboard");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let api = Arc::new(ApiClient::new(config.api_url.clone()));
    let dashboard = Dashboard::new(api, config.poll_interval());
    let app = App::new(dashboard, config.trade_form());
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "dashboard exited with an error");
    }
    res
}

fn init_logging(path: &Path, debug: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: Backend, A: TradingApi>(
    terminal: &mut Terminal<B>,
    mut app: App<A>,
) -> Result<()> {
    app.dashboard.start_polling();

    let mut dirty = true;
    loop {
        if dirty {
            app.clamp_selection();
            terminal.draw(|f| ui::draw(f, &app))?;
            dirty = false;
        }

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        // Apply whatever the network tasks finished meanwhile
        if app.dashboard.drain() {
            dirty = true;
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    app.dashboard.stop_polling();
    Ok(())
}
