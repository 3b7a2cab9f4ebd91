//! Falling-block puzzle engine
//!
//! The board grid, the active and next piece, collision testing, rotation
//! with wall kicks, row clearing and the fall/pause state machine. Rendering,
//! input devices and audio stay outside; they drive a [`Game`] through
//! [`Game::handle`] and [`Game::update`] and listen via [`GameObserver`].

pub mod board;
pub mod events;
pub mod factory;
pub mod game;
pub mod movement;
pub mod piece;
pub mod settings;
pub mod srs;
pub mod tetromino;
pub mod timer;

pub use board::Board;
pub use events::{GameEvent, GameObserver};
pub use factory::PieceFactory;
pub use game::{Action, Game, GameState};
pub use movement::Position;
pub use piece::Piece;
pub use settings::Settings;
pub use tetromino::{Rotation, RotationDirection, TetrominoType};
