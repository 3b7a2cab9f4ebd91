//! Tetromino definitions and shapes
//!
//! The seven pieces in their spawn orientation, each as a small occupancy
//! matrix. Rotated orientations are derived from these by matrix rotation
//! (see `piece.rs`), so only the spawn templates live here.

use std::fmt;

/// The 7 tetromino types, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // long bar
    L,
    J,
    O, // square
    S,
    Z,
    T,
}

const X: bool = true;
const O: bool = false;

const I_SHAPE: &[&[bool]] = &[
    &[O, O, O, O],
    &[X, X, X, X],
    &[O, O, O, O],
    &[O, O, O, O],
];
const L_SHAPE: &[&[bool]] = &[&[X, O, O], &[X, X, X], &[O, O, O]];
const J_SHAPE: &[&[bool]] = &[&[O, O, X], &[X, X, X], &[O, O, O]];
const O_SHAPE: &[&[bool]] = &[&[X, X], &[X, X]];
const S_SHAPE: &[&[bool]] = &[&[X, X, O], &[O, X, X], &[O, O, O]];
const Z_SHAPE: &[&[bool]] = &[&[O, X, X], &[X, X, O], &[O, O, O]];
const T_SHAPE: &[&[bool]] = &[&[O, O, O], &[X, X, X], &[O, X, O]];

impl TetrominoType {
    /// Get all tetromino types, in catalog order
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::L,
            TetrominoType::J,
            TetrominoType::O,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::T,
        ]
    }

    /// Colour id written into board cells for this piece (1..=7)
    pub fn color(&self) -> u8 {
        match self {
            TetrominoType::I => 1,
            TetrominoType::L => 2,
            TetrominoType::J => 3,
            TetrominoType::O => 4,
            TetrominoType::S => 5,
            TetrominoType::Z => 6,
            TetrominoType::T => 7,
        }
    }

    /// Inverse of [`TetrominoType::color`]
    pub fn from_color(color: u8) -> Option<TetrominoType> {
        Self::all().into_iter().find(|t| t.color() == color)
    }

    /// Spawn-orientation occupancy template, row 0 at the top
    pub fn shape(&self) -> &'static [&'static [bool]] {
        match self {
            TetrominoType::I => I_SHAPE,
            TetrominoType::L => L_SHAPE,
            TetrominoType::J => J_SHAPE,
            TetrominoType::O => O_SHAPE,
            TetrominoType::S => S_SHAPE,
            TetrominoType::Z => Z_SHAPE,
            TetrominoType::T => T_SHAPE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TetrominoType::I => "I",
            TetrominoType::L => "L",
            TetrominoType::J => "J",
            TetrominoType::O => "O",
            TetrominoType::S => "S",
            TetrominoType::Z => "Z",
            TetrominoType::T => "T",
        }
    }
}

impl fmt::Display for TetrominoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotation states (SRS naming: 0, R, 2, L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Spawn, // 0
    Right, // R, one turn clockwise from spawn
    Two,   // 2
    Left,  // L, one turn counter-clockwise from spawn
}

impl Rotation {
    /// Rotate clockwise: 0 → R → 2 → L → 0
    pub fn cw(&self) -> Rotation {
        match self {
            Rotation::Spawn => Rotation::Right,
            Rotation::Right => Rotation::Two,
            Rotation::Two => Rotation::Left,
            Rotation::Left => Rotation::Spawn,
        }
    }

    /// Rotate counter-clockwise: 0 → L → 2 → R → 0
    pub fn ccw(&self) -> Rotation {
        match self {
            Rotation::Spawn => Rotation::Left,
            Rotation::Left => Rotation::Two,
            Rotation::Two => Rotation::Right,
            Rotation::Right => Rotation::Spawn,
        }
    }

    /// Step one state in the given direction
    pub fn turn(&self, direction: RotationDirection) -> Rotation {
        match direction {
            RotationDirection::Clockwise => self.cw(),
            RotationDirection::CounterClockwise => self.ccw(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Rotation::Spawn => "0",
            Rotation::Right => "R",
            Rotation::Two => "2",
            Rotation::Left => "L",
        }
    }
}

/// Direction for rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_are_distinct_and_in_range() {
        let mut seen = Vec::new();
        for t in TetrominoType::all() {
            let c = t.color();
            assert!((1..=7).contains(&c));
            assert!(!seen.contains(&c));
            seen.push(c);
        }
        assert_eq!(TetrominoType::from_color(0), None);
        assert_eq!(TetrominoType::from_color(8), None);
    }

    #[test]
    fn test_color_roundtrip() {
        for t in TetrominoType::all() {
            assert_eq!(TetrominoType::from_color(t.color()), Some(t));
        }
    }

    #[test]
    fn test_shapes_are_rectangular_with_four_cells() {
        for t in TetrominoType::all() {
            let shape = t.shape();
            let width = shape[0].len();
            assert!(shape.iter().all(|row| row.len() == width), "{t} is ragged");
            let filled = shape.iter().flat_map(|row| row.iter()).filter(|c| **c).count();
            assert_eq!(filled, 4, "{t} should have 4 cells");
        }
    }

    #[test]
    fn test_rotation_cycle() {
        let mut r = Rotation::Spawn;
        let mut symbols = String::new();
        for _ in 0..4 {
            symbols.push_str(r.symbol());
            r = r.cw();
        }
        assert_eq!(symbols, "0R2L");
        assert_eq!(r, Rotation::Spawn);
        assert_eq!(Rotation::Spawn.ccw(), Rotation::Left);
        assert_eq!(Rotation::Left.ccw(), Rotation::Two);
    }
}
