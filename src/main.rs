use std::fs::{self, OpenOptions};
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use birthday_tui::app::App;
use birthday_tui::cli::{parse_args, CliConfig, Command};
use birthday_tui::config::Config;
use birthday_tui::notify::WebhookClient;
use birthday_tui::persistence::STAGE_KEY;
use birthday_tui::server;
use birthday_tui::storage::{KeyValueStore, MemoryStore, SqliteStore};
use birthday_tui::ui;

/// How long to wait for input before the next tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args()?;
    let config = load_config(&cli)?;

    match cli.command {
        Command::Serve => {
            init_stdout_logging();
            let webhook = WebhookClient::new(config.webhook_url.clone(), config.name.clone());
            if !webhook.is_configured() {
                warn!("DISCORD_WEBHOOK_URL is not set, every request will fail");
            }
            server::serve(webhook, config.port).await
        }
        Command::Play => {
            init_file_logging(&config)?;
            play(&config, cli.fresh)
        }
    }
}

fn load_config(cli: &CliConfig) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(dir) = &cli.state_dir {
        config.state_dir = dir.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    Ok(config)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stdout_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// The terminal belongs to the UI, so logs go to a file in the state dir
fn init_file_logging(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.state_dir).with_context(|| {
        format!("Failed to create state directory {}", config.state_dir.display())
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .context("Failed to open log file")?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

/// Durable storage, or memory-only if the database cannot be opened
fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    match SqliteStore::open(config.database_path()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Progress will not be saved: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn play(config: &Config, fresh: bool) -> Result<()> {
    let store = open_store(config);
    if fresh {
        info!("Starting fresh");
        if let Err(e) = store.remove(STAGE_KEY) {
            warn!("Failed to clear stored stage: {}", e);
        }
    }

    let sink = Arc::new(WebhookClient::new(config.webhook_url.clone(), config.name.clone()));
    if !sink.is_configured() {
        warn!("DISCORD_WEBHOOK_URL is not set, dreams will not be sent");
    }
    let mut app = App::new(store, sink, config.name.clone(), Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("Leaving at stage {}", app.stage());
    result.context("Terminal I/O failed")
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
