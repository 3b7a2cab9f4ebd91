//! Core game state and logic
//!
//! A [`Game`] owns the board, the active and next pieces and the fall timer.
//! Every change goes through [`Game::handle`] or [`Game::update`], which run
//! synchronously, so timer ticks and player input are strictly serialized.

use crate::board::Board;
use crate::events::{GameEvent, GameObserver};
use crate::factory::PieceFactory;
use crate::movement::{self, Position};
use crate::piece::Piece;
use crate::tetromino::RotationDirection;
use crate::timer::FallTimer;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NoGame,
    InGame,
    Paused,
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::NoGame => "no game",
            GameState::InGame => "in game",
            GameState::Paused => "paused",
            GameState::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Input actions the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveDown,
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    HardDrop,
    TogglePause,
}

/// The main game struct
pub struct Game<R: Rng = ChaCha8Rng> {
    board: Board,
    /// Active piece; None until the first game starts
    current: Option<Piece>,
    /// Last confirmed position of the active piece
    position: Position,
    /// Pre-generated piece shown in the preview
    next: Piece,
    factory: PieceFactory<R>,
    state: GameState,
    /// Steps taken since the active piece was placed
    no_collision: u32,
    timer: FallTimer,
    observers: Vec<Box<dyn GameObserver>>,
    /// Events raised during the current call, delivered when it finishes
    pending: Vec<GameEvent>,
}

impl Game {
    /// Create a session with an entropy-seeded piece factory
    pub fn new() -> Self {
        Self::with_factory(PieceFactory::new())
    }

    /// Create a session whose piece sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_factory(PieceFactory::with_seed(seed))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    pub fn with_factory(mut factory: PieceFactory<R>) -> Self {
        let next = factory.spawn();
        Self {
            board: Board::new(),
            current: None,
            position: Position::default(),
            next,
            factory,
            state: GameState::NoGame,
            no_collision: 0,
            timer: FallTimer::default(),
            observers: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Register an observer for state changes and feedback events
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn no_collision_count(&self) -> u32 {
        self.no_collision
    }

    pub fn fall_interval(&self) -> Duration {
        self.timer.interval()
    }

    /// Retune the automatic fall; applies from the next scheduled tick
    pub fn set_fall_interval(&mut self, interval: Duration) {
        debug!(interval_ms = interval.as_millis() as u64, "fall interval changed");
        self.timer.set_interval(interval);
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Start a fresh game, discarding any game in progress
    pub fn new_game(&mut self, now: Instant) {
        info!(first = %self.next.piece_type, "new game");
        self.timer.stop();
        self.board = Board::with_size(self.board.width(), self.board.height());
        self.place_next();
        self.timer.start(now);
        self.set_state(GameState::InGame);
        self.pending.push(GameEvent::Changed);
        self.flush();
    }

    /// Process a player action
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::TogglePause => self.toggle_pause(now),
            _ => self.step(action),
        }
        self.flush();
    }

    /// Let the fall timer advance the game (call every frame)
    pub fn update(&mut self, now: Instant) {
        if self.timer.poll(now) {
            self.step(Action::MoveDown);
            self.flush();
        }
    }

    fn toggle_pause(&mut self, now: Instant) {
        match self.state {
            GameState::InGame => {
                self.timer.stop();
                self.set_state(GameState::Paused);
                self.pending.push(GameEvent::Paused(true));
            }
            GameState::Paused => {
                self.timer.start(now);
                self.set_state(GameState::InGame);
                self.pending.push(GameEvent::Paused(false));
            }
            GameState::NoGame | GameState::GameOver => {}
        }
    }

    /// Run one move against the board
    fn step(&mut self, action: Action) {
        if self.state != GameState::InGame {
            return;
        }
        let Some(mut piece) = self.current.take() else {
            return;
        };

        movement::clear_footprint(&mut self.board, &piece, self.position);

        let mut target = self.position;
        let mut turned = false;
        match action {
            Action::MoveDown => target.y += 1,
            Action::MoveLeft => target.x -= 1,
            Action::MoveRight => target.x += 1,
            Action::RotateLeft | Action::RotateRight => {
                let direction = if action == Action::RotateRight {
                    RotationDirection::Clockwise
                } else {
                    RotationDirection::CounterClockwise
                };
                if let Some((rotated, at)) =
                    movement::rotate_with_kicks(&self.board, &piece, self.position, direction)
                {
                    piece = rotated;
                    target = at;
                    turned = true;
                    self.pending.push(GameEvent::Rotated);
                }
            }
            Action::HardDrop => {
                let landing = movement::hard_drop(&self.board, &piece, self.position);
                target = landing.position;
                // rows fallen count as falls, so a lock right after is not a blocked spawn
                self.no_collision += landing.steps;
                self.pending.push(GameEvent::Scrolled);
            }
            Action::TogglePause => {}
        }

        let changed = match movement::test_move(&self.board, &piece, target) {
            Some(footprint) => {
                movement::apply(&mut self.board, &footprint);
                let moved = target != self.position || turned;
                self.position = target;
                self.current = Some(piece);
                moved
            }
            None => {
                movement::commit(&mut self.board, &piece, self.position);
                self.current = Some(piece);
                match action {
                    Action::MoveDown if self.no_collision <= 1 => {
                        self.game_over();
                        false
                    }
                    Action::MoveDown => {
                        self.lock();
                        true
                    }
                    _ => false,
                }
            }
        };

        self.no_collision += 1;
        if changed {
            self.pending.push(GameEvent::Changed);
        }
    }

    /// Lock the current piece, clear rows and spawn next
    fn lock(&mut self) {
        if let Some(piece) = &self.current {
            debug!(
                piece = %piece.piece_type,
                x = self.position.x,
                y = self.position.y,
                "piece locked"
            );
        }
        self.pending.push(GameEvent::Brick);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            debug!(rows = cleared, "rows cleared");
            self.pending.push(GameEvent::RowsCleared(cleared));
        }

        self.place_next();
    }

    /// Promote the next piece to current and draw a new next piece
    fn place_next(&mut self) {
        let piece = std::mem::replace(&mut self.next, self.factory.spawn());
        let position = movement::spawn_position(&self.board, &piece);
        // overwrites whatever is there; a blocked spawn ends the game on the next fall
        movement::commit(&mut self.board, &piece, position);
        debug!(piece = %piece.piece_type, x = position.x, next = %self.next.piece_type, "piece spawned");

        self.current = Some(piece);
        self.position = position;
        self.no_collision = 0;
    }

    fn game_over(&mut self) {
        self.timer.stop();
        self.set_state(GameState::GameOver);
    }

    fn set_state(&mut self, state: GameState) {
        if self.state == state {
            return;
        }
        info!(from = %self.state, to = %state, "game state changed");
        self.state = state;
        self.pending.push(GameEvent::StateChanged(state));
    }

    /// Deliver queued events to observers
    fn flush(&mut self) {
        let events = std::mem::take(&mut self.pending);
        for event in &events {
            for observer in &mut self.observers {
                observer.notify(event);
            }
        }
    }
}
