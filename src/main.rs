//! Dry Kitchen Ingredient Tracker
//!
//! A terminal dashboard that shows each ingredient's stock as a gauge
//! against its low-stock threshold.
//!
//! Controls:
//! - q: Quit
//! - e / Enter: Edit lower threshold of the selected ingredient
//! - n: Edit name of the selected ingredient
//! - g: Toggle grocery list (ingredients below threshold)
//! - ?: Help overlay
//! - ↑/↓: Navigate ingredient list
//! - PgUp/PgDown: Scroll by page
//! - Home/End: Jump to start/end

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;

use spice_tracker::app::{cli::Args, App, KeyAction};
use spice_tracker::config::AppConfig;
use spice_tracker::constants::{APP_NAME, APP_VERSION, POLL_INTERVAL_MS};
use spice_tracker::inventory::IngredientController;
use spice_tracker::logging::{setup_logger, LogTarget};
use spice_tracker::ui::{render, report::write_report};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = match args.config {
            Some(ref path) => {
                AppConfig::init_config_at(path)?;
                path.clone()
            }
            None => AppConfig::init_user_config()?,
        };
        println!("Config written to {}", path.display());
        return Ok(());
    }

    let mut config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    args.apply(&mut config);

    let target = match (config.log_dir(), args.report) {
        (Some(dir), _) => LogTarget::File(dir),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    };
    let _log_guard = setup_logger(target, config.log_level()).context("initializing logging")?;
    info!(version = APP_VERSION, policy = config.threshold_policy().name(), "starting {}", APP_NAME);

    let inventory = IngredientController::with_samples(config.threshold_policy());

    if args.report {
        let width = config.bar_width().unwrap_or(40);
        let mut stdout = io::stdout();
        write_report(&mut stdout, inventory.ingredients(), width)?;
        return Ok(());
    }

    let mut app = App::with_config(inventory, &config);
    run_interactive(&mut app)?;

    info!("session closed");
    println!("Ingredient tracker closed.");
    Ok(())
}

/// Runs the dashboard until the user quits, restoring the terminal on
/// every exit path.
fn run_interactive(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();

    // Set up terminal
    terminal::enable_raw_mode().context("enabling raw mode")?;
    execute!(stdout, EnterAlternateScreen, DisableLineWrap, Hide)?;

    let result = event_loop(&mut stdout, app);

    // Restore terminal
    execute!(stdout, Show, EnableLineWrap, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop(stdout: &mut io::Stdout, app: &mut App) -> Result<()> {
    let poll_interval = Duration::from_millis(POLL_INTERVAL_MS);

    loop {
        if app.take_dirty() {
            render(stdout, app)?;
        }

        if !event::poll(poll_interval)? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                // Only handle key PRESS events, ignore Release and Repeat
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key_event.code, key_event.modifiers) == KeyAction::Exit {
                    return Ok(());
                }
            }
            Event::Resize(..) => app.invalidate(),
            _ => {}
        }
    }
}
