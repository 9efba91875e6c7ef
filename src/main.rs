use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connect_four::config::AppConfig;
use connect_four::game::GameOutcome;
use connect_four::ui::{App, CrosstermEvents, RenderContext};
use connect_four::{console, logging};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

/// Two-player Connect Four.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Mode {
    /// Click columns on a terminal canvas (default)
    #[default]
    Window,
    /// Type column numbers at a prompt
    Console,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    logging::init(&config.logging)
        .with_context(|| format!("opening log file {}", config.logging.file.display()))?;
    if !cli.config.exists() {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.mode.unwrap_or_default() {
        Mode::Console => {
            console::run(io::stdin().lock(), io::stdout().lock()).context("console session")?;
        }
        Mode::Window => {
            let ctx = RenderContext::from_config(&config.display)?;
            let outcome = run_window(&ctx).context("graphical session")?;
            match outcome {
                GameOutcome::Win(player) => println!("{player} won"),
                GameOutcome::Draw => println!("Draw"),
                GameOutcome::InProgress => {}
            }
        }
    }
    Ok(())
}

fn run_window(ctx: &RenderContext) -> io::Result<GameOutcome> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(CrosstermEvents::new());
    let res = app.run(&mut terminal, ctx);

    // Restore terminal even if the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
