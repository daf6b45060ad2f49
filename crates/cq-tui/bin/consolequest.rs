//! ConsoleQuest
//!
//! Main entry point for the game.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor, event,
    event::{Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use cq_core::{Difficulty, GameLoopResult};
use cq_tui::{App, GraphicsMode, Theme};

/// Walk a 20x20 world from the top-left corner to the goal
#[derive(Parser, Debug)]
#[command(name = "consolequest")]
#[command(author, version, about = "ConsoleQuest - reach the destination!", long_about = None)]
struct Args {
    /// Difficulty (1/easy, 2/normal, 3/hard); skips the menu
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<Difficulty>,

    /// Seed for map generation and all later rolls
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Glyph set: classic, fancy or auto
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,

    /// Use colors for a light terminal background
    #[arg(long = "light")]
    light: bool,

    /// Write log output to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.log_file.as_deref(), args.verbose) {
        eprintln!("Failed to set up logging: {err:#}");
    }
    install_panic_hook();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            restore_terminal();
            error!("fatal: {err:#}");
            eprintln!("An error occurred!");
            eprintln!("{err:?}");
            eprintln!("Press any key to exit.");
            wait_for_key();
            ExitCode::FAILURE
        }
    }
}

/// Logs go to `log_file` when given. Otherwise nothing is logged unless
/// RUST_LOG is set, since stderr shares the screen with the UI.
fn init_logging(log_file: Option<&Path>, verbosity: u8) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        env_logger::Builder::from_default_env().try_init()?;
        return Ok(());
    };

    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

/// Leave raw mode before the default panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn wait_for_key() {
    if enable_raw_mode().is_err() {
        return;
    }
    while let Ok(event) = event::read() {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            break;
        }
    }
    let _ = disable_raw_mode();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    info!(
        "starting: difficulty={:?} seed={:?} graphics={}",
        args.difficulty, args.seed, args.graphics
    );

    let mut app = match args.difficulty {
        Some(difficulty) => App::with_difficulty(difficulty, theme, args.graphics, args.seed),
        None => App::new(theme, args.graphics, args.seed),
    };

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    restore_terminal();
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let event = event::read()?;

        if let Some(command) = app.handle_event(event) {
            match app.execute(command) {
                GameLoopResult::PlayerDied(cause) => info!("player died: {cause}"),
                GameLoopResult::PlayerWon => info!("player reached the goal"),
                GameLoopResult::PlayerQuit => {
                    info!("player quit");
                    break;
                }
                GameLoopResult::Continue => {}
            }
        }

        if app.take_flush_request() {
            // Drop keys typed before the prompt appeared
            terminal.draw(|frame| app.render(frame))?;
            while event::poll(Duration::ZERO)? {
                event::read()?;
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
