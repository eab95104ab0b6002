//! # Binary: glitch-screen
//!
//! ## Responsibility
//! Entry point for the terminal "system failure" screen. Loads configuration,
//! initializes the terminal, mounts the screen, runs the render loop, and
//! ensures clean exit.
//!
//! ## Usage
//! ```bash
//! glitch-screen                                   # defaults, random seed
//! glitch-screen --seed 42                         # reproducible animation
//! glitch-screen --config screen.toml --fps 20
//! RUST_LOG=debug glitch-screen --log-file screen.log
//! ```
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C
//! - Timers stopped before the terminal is released

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

use glitch_screen::config::loader::load_from_file;
use glitch_screen::tui::app::App;
use glitch_screen::tui::events::drain_events;
use glitch_screen::tui::ui;
use glitch_screen::{init_tracing, AnimatedErrorScreen, ScreenConfig, ScreenError};

/// Highest accepted `--fps` value.
const MAX_FPS: u64 = 60;

/// CLI arguments for the binary.
#[derive(Debug, Default)]
struct CliArgs {
    /// Optional TOML configuration file.
    config: Option<PathBuf>,
    /// Seed override for every random source.
    seed: Option<u64>,
    /// Where tracing output goes.
    log_file: Option<PathBuf>,
    /// Frame rate override.
    fps: Option<u64>,
}

/// Parses command-line arguments.
///
/// # Returns
/// Parsed `CliArgs`; unknown flags and malformed values are ignored.
fn parse_args() -> CliArgs {
    parse_args_from(std::env::args().skip(1).collect())
}

fn parse_args_from(args: Vec<String>) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--config" => {
                cli.config = value.map(PathBuf::from);
                i += 1;
            }
            "--seed" => {
                cli.seed = value.and_then(|v| v.parse().ok());
                i += 1;
            }
            "--log-file" => {
                cli.log_file = value.map(PathBuf::from);
                i += 1;
            }
            "--fps" => {
                cli.fps = value
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(|fps| fps.clamp(1, MAX_FPS));
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    cli
}

/// Resolves the effective configuration: file (or defaults), then CLI overrides.
///
/// # Errors
/// Returns [`ScreenError::Config`] if the file cannot be read or is invalid.
fn resolve_config(cli: &CliArgs) -> Result<ScreenConfig, ScreenError> {
    let mut config = match &cli.config {
        Some(path) => load_from_file(path)?,
        None => ScreenConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.random.seed = Some(seed);
    }
    if let Some(fps) = cli.fps {
        config.timing.frame_ms = (1000 / fps).max(1);
    }
    Ok(config)
}

/// Sets up the terminal for TUI rendering.
///
/// # Errors
/// Returns `io::Error` if terminal initialization fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
///
/// # Errors
/// Returns `io::Error` if any restore step fails.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();
    let config = resolve_config(&cli)?;

    if let Err(e) = init_tracing(cli.log_file.as_deref()) {
        eprintln!("logging disabled: {e}");
    }

    // Restore the terminal before printing the panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            event::DisableMouseCapture
        );
        default_hook(info);
    }));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut terminal = setup_terminal()?;
    let result = rt.block_on(run(&mut terminal, &config));
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("glitch-screen error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Mounts the screen and runs the render loop until the user quits.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ScreenConfig,
) -> Result<(), ScreenError> {
    let frame_rate: Duration = config.timing.frame_interval();
    let screen = AnimatedErrorScreen::mount(config)?;
    let mut app = App::new(screen, frame_rate);

    let mut frames = tokio::time::interval(frame_rate);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result = loop {
        frames.tick().await;

        if let Err(e) = terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, &app);
        }) {
            break Err(ScreenError::Terminal(e));
        }
        app.on_frame();

        drain_events(&mut app);
        if app.should_quit {
            break Ok(());
        }
    };

    app.screen.unmount();
    tracing::info!(
        frames = app.frame_count,
        retries = app.screen.retry().count(),
        "screen closed"
    );
    result
}
