//! Notifications sent from a game session to its observers
//!
//! Events are queued while a call mutates the session and delivered once it
//! has finished, so observers only ever hear about state that is in effect.

use crate::game::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The session moved to a new state
    StateChanged(GameState),
    /// A rotation was accepted
    Rotated,
    /// A hard drop moved the piece to its landing row
    Scrolled,
    /// The active piece locked into the board
    Brick,
    /// Full rows were removed after a lock
    RowsCleared(usize),
    /// Pause toggled: true when pausing, false when resuming
    Paused(bool),
    /// Board contents or the next piece changed
    Changed,
}

/// Receives game events
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
