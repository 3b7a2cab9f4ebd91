//! Collision testing and piece movement against a board
//!
//! All functions here are stateless. The active piece is stored on the board
//! while it falls, so callers clear its footprint before testing a new
//! candidate and commit it again afterwards.

use crate::board::{Board, EMPTY_CELL};
use crate::piece::Piece;
use crate::srs::{get_wall_kicks, kick_key};
use crate::tetromino::RotationDirection;
use tracing::debug;

/// Board coordinate of a piece's bounding-box top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Absolute cells a piece would occupy, plus its colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    pub cells: Vec<Position>,
    pub color: u8,
}

/// Check whether `piece` fits at `pos`
///
/// Returns the cells it would cover, or None if any occupied cell lands on
/// a filled or out-of-bounds board cell. The board is never modified.
pub fn test_move(board: &Board, piece: &Piece, pos: Position) -> Option<Footprint> {
    let mut cells = Vec::with_capacity(4);
    for (col, row, _) in piece.occupied() {
        let target = pos.offset(col, row);
        if !board.is_empty_at(target.x, target.y) {
            return None;
        }
        cells.push(target);
    }
    Some(Footprint {
        cells,
        color: piece.color(),
    })
}

/// Write the piece's occupied cells onto the board at `pos`
pub fn commit(board: &mut Board, piece: &Piece, pos: Position) {
    for (col, row, color) in piece.occupied() {
        board.set_cell(pos.x + col, pos.y + row, color);
    }
}

/// Reset the piece's occupied cells at `pos` to empty
pub fn clear_footprint(board: &mut Board, piece: &Piece, pos: Position) {
    for (col, row, _) in piece.occupied() {
        board.set_cell(pos.x + col, pos.y + row, EMPTY_CELL);
    }
}

/// Apply an accepted footprint to the board
pub fn apply(board: &mut Board, footprint: &Footprint) {
    for cell in &footprint.cells {
        board.set_cell(cell.x, cell.y, footprint.color);
    }
}

/// Rotate with SRS wall kicks
///
/// Tries the rotated piece in place, then each kick offset for the
/// transition in order. Returns the rotated piece and the position it was
/// validated at, or None if every candidate collides.
pub fn rotate_with_kicks(
    board: &Board,
    piece: &Piece,
    pos: Position,
    direction: RotationDirection,
) -> Option<(Piece, Position)> {
    let rotated = piece.rotated(direction);

    if test_move(board, &rotated, pos).is_some() {
        return Some((rotated, pos));
    }

    let kicks = get_wall_kicks(piece.piece_type, piece.rotation, rotated.rotation);
    for &(dx, dy) in kicks {
        let candidate = pos.offset(dx, dy);
        if test_move(board, &rotated, candidate).is_some() {
            debug!(
                piece = %piece.piece_type,
                kick = %kick_key(piece.rotation, rotated.rotation),
                dx,
                dy,
                "wall kick"
            );
            return Some((rotated, candidate));
        }
    }

    None
}

/// Result of a hard drop probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    /// Resting position directly above the first collision
    pub position: Position,
    /// Rows fallen from the starting position; 0 if the piece cannot move
    pub steps: u32,
}

/// Find where the piece would land if dropped straight down from `pos`
pub fn hard_drop(board: &Board, piece: &Piece, pos: Position) -> Landing {
    let mut probe = pos;
    while test_move(board, piece, probe).is_some() {
        probe.y += 1;
    }
    let position = probe.offset(0, -1);
    Landing {
        position,
        steps: (position.y - pos.y).max(0) as u32,
    }
}

/// Centred spawn position: `x = width/2 - round(piece_width/2)`, `y = 0`
pub fn spawn_position(board: &Board, piece: &Piece) -> Position {
    let half_piece = piece.width().div_ceil(2);
    Position::new(board.width() as i32 / 2 - half_piece as i32, 0)
}
