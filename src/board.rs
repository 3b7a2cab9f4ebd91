//! Game board representation
//!
//! Cells hold a colour id: 0 is empty, 1..=7 come from the piece catalog.

/// Default board dimensions (columns × rows)
pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 18;

pub const EMPTY_CELL: u8 = 0;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Grid stored as [row][col], row 0 is the top
    rows: Vec<Vec<u8>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board of the standard size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Self {
            width,
            height,
            rows: vec![vec![EMPTY_CELL; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x, y))
    }

    /// Get the cell at (x, y), or None if out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// True only for an in-bounds cell holding 0
    ///
    /// Anything outside the grid counts as blocked, so collision tests need
    /// no separate bounds check.
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(EMPTY_CELL)
    }

    /// Set a cell; writes outside the grid are ignored
    pub fn set_cell(&mut self, x: i32, y: i32, value: u8) {
        if let Some((x, y)) = self.index(x, y) {
            self.rows[y][x] = value;
        }
    }

    pub fn clear_cell(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, EMPTY_CELL);
    }

    /// Remove every full row and drop the rows above it
    ///
    /// Surviving rows keep their relative order; the grid is refilled with
    /// empty rows at the top. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.contains(&EMPTY_CELL));
        let cleared = before - self.rows.len();

        for _ in 0..cleared {
            self.rows.insert(0, vec![EMPTY_CELL; self.width]);
        }

        cleared
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| !row.contains(&EMPTY_CELL))
    }

    /// Number of non-empty cells on the board
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c != EMPTY_CELL).count())
            .sum()
    }

    /// Check if the board is completely empty
    pub fn is_clear(&self) -> bool {
        self.filled_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, value: u8) {
        for x in 0..board.width() as i32 {
            board.set_cell(x, y, value);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_clear());
        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 18);
        assert!(board.rows().iter().all(|row| row.len() == 12));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set_cell(5, 5, 3);
        assert_eq!(board.cell(5, 5), Some(3));
        assert!(!board.is_empty_at(5, 5));
        board.clear_cell(5, 5);
        assert!(board.is_empty_at(5, 5));
    }

    #[test]
    fn test_out_of_bounds_is_never_empty() {
        let board = Board::new();
        for (x, y) in [(-1, 0), (0, -1), (12, 0), (0, 18), (-5, -5), (100, 3)] {
            assert!(!board.is_empty_at(x, y), "({x}, {y})");
            assert_eq!(board.cell(x, y), None);
        }
        assert!(board.is_empty_at(0, 0));
        assert!(board.is_empty_at(11, 17));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut board = Board::new();
        board.set_cell(-1, 0, 4);
        board.set_cell(0, 18, 4);
        assert!(board.is_clear());
    }

    #[test]
    fn test_clear_single_line() {
        let mut board = Board::new();
        fill_row(&mut board, 17, 1);
        board.set_cell(0, 16, 6);

        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.height(), 18);
        // The block from row 16 should now be on row 17
        assert_eq!(board.cell(0, 17), Some(6));
        assert!(board.is_empty_at(0, 16));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_keeps_partial_rows_in_order() {
        let mut board = Board::new();
        // rows (top→bottom): 13 marker a, 14 full, 15 marker b, 16 full, 17 marker c
        board.set_cell(1, 13, 2);
        fill_row(&mut board, 14, 1);
        board.set_cell(2, 15, 3);
        fill_row(&mut board, 16, 1);
        board.set_cell(3, 17, 4);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.cell(1, 15), Some(2));
        assert_eq!(board.cell(2, 16), Some(3));
        assert_eq!(board.cell(3, 17), Some(4));
        assert_eq!(board.filled_count(), 3);
        assert!(board.rows()[..15].iter().all(|row| row.iter().all(|&c| c == EMPTY_CELL)));
        assert!(board.rows().iter().all(|row| row.len() == 12));
    }

    #[test]
    fn test_row_with_gap_is_retained() {
        let mut board = Board::new();
        fill_row(&mut board, 17, 5);
        board.clear_cell(11, 17);
        let before = board.clone();

        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new();
        fill_row(&mut board, 10, 7);
        assert!(board.is_row_full(10));
        assert!(!board.is_row_full(11));
        assert!(!board.is_row_full(99));
    }
}
