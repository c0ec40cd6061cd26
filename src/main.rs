mod ui;

use clap::Parser;
use clicker::build_info;
use clicker::core::constants::{GAME_TITLE, INPUT_POLL_MS, TICK_INTERVAL_MS};
use clicker::core::{GameState, TickTimer};
use clicker::input::{handle_key, handle_mouse, GameScreen, InputResult};
use clicker::utils::logging;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Cookie Clicker Workshop - click the cookie, buy helpers, watch it grow.
#[derive(Parser)]
#[command(name = "clicker", version = build_info::BUILD_VERSION)]
struct Cli {
    /// Milliseconds between production ticks
    #[arg(long, default_value_t = TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Log file (defaults to ~/.clicker/clicker.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match logging::init_file_logger(cli.log_file.as_deref()) {
        Ok(path) => log::debug!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    log::info!(
        "Starting clicker {} (tick every {} ms)",
        build_info::BUILD_VERSION,
        cli.tick_ms
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, Duration::from_millis(cli.tick_ms));

    // Cleanup terminal, even when the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.backend_mut().execute(SetTitle(GAME_TITLE))?;
    terminal.show_cursor()?;

    match result {
        Ok(state) => {
            log::info!("Session ended with {} cookies", state.cookies());
            println!("You finished with {} cookies. Goodbye!", state.cookies());
            Ok(())
        }
        Err(e) => {
            log::error!("Game aborted: {}", e);
            Err(e)
        }
    }
}

/// Runs the game screen until the player quits. Returns the final state.
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    tick_interval: Duration,
) -> io::Result<GameState> {
    let mut state = GameState::new();
    let mut screen = GameScreen::new();
    let mut timer = TickTimer::start(tick_interval, Instant::now());
    let mut title = String::new();

    loop {
        // Keep the window title in step with the cookie count
        let current_title = state.title();
        if current_title != title {
            terminal.backend_mut().execute(SetTitle(&current_title))?;
            title = current_title;
        }

        let rate = state.current_rate().map_err(io::Error::other)?;
        let progress = timer.progress(Instant::now());
        terminal.draw(|frame| ui::draw_game(frame, &state, rate, &mut screen, progress))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let input = match event::read()? {
                Event::Key(key) => handle_key(key, &mut state, &mut screen),
                Event::Mouse(mouse) => handle_mouse(mouse, &mut state, &mut screen),
                _ => Ok(InputResult::Continue),
            };
            if input.map_err(io::Error::other)? == InputResult::Quit {
                timer.stop();
                log::info!("Tick timer stopped after {} ticks", timer.ticks_fired());
                break;
            }
        }

        if timer.poll(Instant::now()) {
            let tick = state.advance_tick().map_err(io::Error::other)?;
            log::trace!("Tick: +{} cookies ({} total)", tick.rate, tick.cookies);
        }
    }

    Ok(state)
}
