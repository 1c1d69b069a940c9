use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{error, info};

use cmdk::app::{catalog, r#loop::run_loop, state::AppState};
use cmdk::config::Config;
use cmdk::domain::models::PaletteEvent;
use cmdk::infrastructure::{catalog::load_catalog, terminal::TerminalEventSource};
use cmdk::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (default: ~/.config/cmdk/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Commands catalog, overrides `commands_file` from the config
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            PopKeyboardEnhancementFlags,
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Everything that can fail on bad input happens BEFORE terminal setup so
    // we never leave the terminal in raw mode.
    let mut config = Config::load(args.config.as_deref()).context("loading config")?;
    if args.commands.is_some() {
        config.commands_file = args.commands;
    }
    if let Some(log_path) = config.log_path() {
        init_tracing(&log_path, args.debug)?;
    }

    let user_commands = match &config.commands_file {
        Some(path) => load_catalog(path).with_context(|| format!("loading {}", path.display()))?,
        None => Vec::new(),
    };
    let app_state = AppState::new(&config, catalog::assemble(user_commands));
    info!(
        commands = app_state.command_palette.items().len(),
        "starting"
    );

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let listener = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            match event {
                PaletteEvent::Selected(item) => info!(id = %item.id, "selected"),
                PaletteEvent::OpenChanged(open) => info!(open, "palette open changed"),
            }
        }
    });

    // Run app
    let res = run_loop(
        &mut terminal,
        app_state,
        &TerminalEventSource,
        None,
        Some(events_tx),
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    let _ = listener.await;

    if let Err(err) = res {
        error!("{err:?}");
        println!("{:?}", err);
    }

    Ok(())
}
