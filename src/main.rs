mod app;
mod domain;
mod error;
mod input;
mod notifications;
mod persistence;
mod store;
mod ticker;
mod ui;

use app::AppState;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    atomic_write, config_file, ensure_data_dir, init_local_data_dir, load_config, load_state,
    log_file, state_file, CONFIG_TEMPLATE,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use store::{RemoteStore, SyncHandle};
use tracing_subscriber::EnvFilter;

/// How long quitting waits for in-flight saves
const EXIT_GRACE: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "pomotrack")]
#[command(about = "A terminal Pomodoro timer that tracks sessions per project", long_about = None)]
struct Cli {
    /// Project store URL, overriding config.toml
    #[arg(long)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomotrack directory with a template config.toml
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            let config_path = config_file(&data_dir);
            atomic_write(&config_path, CONFIG_TEMPLATE)?;
            println!("Initialized pomotrack directory: {}", data_dir.display());
            println!();
            println!("Set `endpoint` in {} to your Apps Script URL,", config_path.display());
            println!("then run 'pomotrack' to start.");
            Ok(())
        }
        None => run_tui(cli.endpoint),
    }
}

/// Send tracing output to the log file; the terminal belongs to the UI
fn init_logging(data_dir: &Path) -> Result<()> {
    let path = log_file(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("POMOTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(endpoint_override: Option<String>) -> Result<()> {
    let data_dir = ensure_data_dir()?;
    eprintln!("Using pomotrack directory: {}", data_dir.display());

    // Config errors abort before the terminal is taken over
    let mut config = load_config(config_file(&data_dir))?;
    if endpoint_override.is_some() {
        config.endpoint = endpoint_override;
    }

    init_logging(&data_dir)?;
    tracing::info!(dir = %data_dir.display(), "starting pomotrack");

    let state_path = state_file(&data_dir);
    let local = load_state(&state_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable local state");
        Default::default()
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let store = config.endpoint().map(RemoteStore::new).transpose()?;
    let sync = SyncHandle::new(store, runtime.handle().clone());
    tracing::info!(configured = sync.is_configured(), "project store");

    let mut app = AppState::new(&config, local, sync, state_path);
    app.start_sync();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Last changes out before the runtime goes away
    app.flush();
    app.finish_pending(EXIT_GRACE);
    if let Some(message) = &app.error {
        eprintln!("{}", message);
    }
    tracing::info!("pomotrack exited");

    if let Err(err) = result {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but no longer than the next tick
        if event::poll(app.next_wakeup(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
        app.poll_sync();
        app.flush();
    }
}
