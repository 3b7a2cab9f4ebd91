//! Piece instances and matrix rotation

use crate::tetromino::{Rotation, RotationDirection, TetrominoType};

/// A piece instance: a colour matrix in its current orientation
///
/// Occupied cells hold the type's colour id, free cells hold 0. Pieces are
/// values; rotating one yields a new `Piece`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    cells: Vec<Vec<u8>>,
    pub piece_type: TetrominoType,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a piece in spawn orientation
    pub fn new(piece_type: TetrominoType) -> Self {
        let template = piece_type.shape();
        assert!(
            !template.is_empty() && !template[0].is_empty(),
            "shape template for {piece_type} is empty"
        );
        let width = template[0].len();
        assert!(
            template.iter().all(|row| row.len() == width),
            "shape template for {piece_type} is not rectangular"
        );

        let color = piece_type.color();
        let cells = template
            .iter()
            .map(|row| row.iter().map(|&filled| if filled { color } else { 0 }).collect())
            .collect();

        Self {
            cells,
            piece_type,
            rotation: Rotation::Spawn,
        }
    }

    /// The colour matrix, row 0 at the top
    pub fn cells(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub fn color(&self) -> u8 {
        self.piece_type.color()
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells as (col, row, colour) relative to the bounding box
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, c)| **c > 0)
                .map(move |(col, &c)| (col as i32, row as i32, c))
        })
    }

    /// Return this piece turned a quarter in `direction`
    ///
    /// Clockwise: `new[col][rows - 1 - row] = old[row][col]`.
    /// Counter-clockwise: `new[cols - 1 - col][row] = old[row][col]`.
    pub fn rotated(&self, direction: RotationDirection) -> Piece {
        let rows = self.height();
        let cols = self.width();
        let mut cells = vec![vec![0u8; rows]; cols];

        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                match direction {
                    RotationDirection::Clockwise => cells[col][rows - 1 - row] = value,
                    RotationDirection::CounterClockwise => cells[cols - 1 - col][row] = value,
                }
            }
        }

        Piece {
            cells,
            piece_type: self.piece_type,
            rotation: self.rotation.turn(direction),
        }
    }
}
