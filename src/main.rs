//! BRICKFALL - terminal front-end for the falling-block engine

mod input;
mod ui;

use brickfall::{Game, GameEvent, Settings};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::{Command, KeyBindings};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// Get the brickfall temp directory, creating it if needed
fn brickfall_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("brickfall");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    // Log to a file; the terminal belongs to the game
    let log_dir = brickfall_temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "brickfall=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!(
        "BRICKFALL starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();
    // First run: write the defaults out so there is a file to edit
    if Settings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            tracing::warn!("could not write default settings: {}", e);
        }
    }
    let bindings = KeyBindings::from_settings(&settings);

    let mut game = match settings.gameplay.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    game.set_fall_interval(settings.gameplay.fall_interval());
    game.subscribe(|event: &GameEvent| tracing::trace!(?event, "game event"));

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut game, &bindings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Err(e) = &result {
        tracing::error!("terminal error: {}", e);
    }
    tracing::info!(state = %game.state(), "BRICKFALL shutting down");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
    bindings: &KeyBindings,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render_game(frame, game))?;

        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match bindings.map(key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::NewGame) => game.new_game(Instant::now()),
                        Some(Command::Game(action)) => game.handle(action, Instant::now()),
                        None => {}
                    }
                }
            }
        }

        game.update(Instant::now());
    }
}
