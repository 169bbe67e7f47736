//! usrdir-manager binary entry point.
//!
//! Initializes logging and the terminal in raw mode, runs the TUI event loop,
//! and restores the terminal state on exit.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod cache;
mod error;
mod remote;
mod search;
mod store;
mod ui;
mod user;
mod validate;

use cache::CacheSlot;
use remote::HttpDirectory;
use store::UserStore;

#[derive(Debug, Parser)]
#[command(name = "usrdir-manager", about = "Manage a remote user directory from the terminal")]
struct Args {
    /// Base URL of the remote user resource.
    #[arg(long, env = "USRDIR_BASE_URL", default_value = remote::DEFAULT_BASE_URL)]
    base_url: String,

    /// Path of the persisted cache slot.
    #[arg(long, default_value = "users.json")]
    cache: PathBuf,

    /// Do not propagate local mutations to the remote endpoint.
    #[arg(long)]
    offline: bool,

    /// Log file (the TUI owns the terminal, so logs go to a file).
    #[arg(long, default_value = "usrdir-manager.log")]
    log_file: PathBuf,
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = std::fs::File::create(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let remote = HttpDirectory::new(&args.base_url)?;
    let store = UserStore::new(remote, CacheSlot::new(&args.cache));

    let mut terminal = init_terminal().map_err(|e| anyhow::anyhow!("init terminal: {e}"))?;

    let res = app::run(&mut terminal, store, args.offline).await;

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
