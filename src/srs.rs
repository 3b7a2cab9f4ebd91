//! Super Rotation System (SRS) wall kick data
//!
//! If an in-place rotation collides, these offsets are tried in order.
//! Offsets are (dx, dy) on the board grid: x grows rightward, y grows
//! downward, so the usual SRS "up" offsets appear here with a negated dy.
//! The zero offset is not listed; the in-place test always runs first.

use crate::tetromino::{Rotation, TetrominoType};

pub type Kick = (i32, i32);

const NO_KICKS: &[Kick] = &[];

const JLSTZ_0R: &[Kick] = &[(-1, 0), (-1, -1), (0, 2), (-1, 2)];
const JLSTZ_R0: &[Kick] = &[(1, 0), (1, 1), (0, -2), (1, -2)];
const JLSTZ_R2: &[Kick] = &[(1, 0), (1, 1), (0, -2), (1, -2)];
const JLSTZ_2R: &[Kick] = &[(-1, 0), (-1, -1), (0, 2), (-1, 2)];
const JLSTZ_2L: &[Kick] = &[(1, 0), (1, -1), (0, 2), (1, 2)];
const JLSTZ_L2: &[Kick] = &[(-1, 0), (-1, 1), (0, -2), (-1, -2)];
const JLSTZ_L0: &[Kick] = &[(-1, 0), (-1, 1), (0, -2), (-1, -2)];
const JLSTZ_0L: &[Kick] = &[(1, 0), (1, -1), (0, 2), (1, 2)];

const I_0R: &[Kick] = &[(-2, 0), (1, 0), (-2, 1), (1, -2)];
const I_R0: &[Kick] = &[(2, 0), (-1, 0), (2, -1), (-1, 2)];
const I_R2: &[Kick] = &[(-1, 0), (2, 0), (-1, -2), (2, 1)];
const I_2R: &[Kick] = &[(1, 0), (-2, 0), (1, 2), (-2, -1)];
const I_2L: &[Kick] = &[(2, 0), (-1, 0), (2, -1), (-1, 2)];
const I_L2: &[Kick] = &[(-2, 0), (1, 0), (-2, 1), (1, -2)];
const I_L0: &[Kick] = &[(1, 0), (-2, 0), (1, 2), (-2, -1)];
const I_0L: &[Kick] = &[(-1, 0), (2, 0), (-1, -2), (2, 1)];

/// Table key for a transition, e.g. `"0R"` or `"L2"`
pub fn kick_key(from: Rotation, to: Rotation) -> String {
    format!("{}{}", from.symbol(), to.symbol())
}

/// Get wall kick offsets for a rotation from `from` to `to`
///
/// The O piece, and any pair that is not a single quarter turn, yields an
/// empty list.
pub fn get_wall_kicks(piece_type: TetrominoType, from: Rotation, to: Rotation) -> &'static [Kick] {
    match piece_type {
        TetrominoType::O => NO_KICKS,
        TetrominoType::I => i_piece_kicks(from, to),
        _ => jlstz_kicks(from, to),
    }
}

fn jlstz_kicks(from: Rotation, to: Rotation) -> &'static [Kick] {
    use Rotation::*;

    match (from, to) {
        (Spawn, Right) => JLSTZ_0R,
        (Right, Spawn) => JLSTZ_R0,
        (Right, Two) => JLSTZ_R2,
        (Two, Right) => JLSTZ_2R,
        (Two, Left) => JLSTZ_2L,
        (Left, Two) => JLSTZ_L2,
        (Left, Spawn) => JLSTZ_L0,
        (Spawn, Left) => JLSTZ_0L,
        _ => NO_KICKS,
    }
}

fn i_piece_kicks(from: Rotation, to: Rotation) -> &'static [Kick] {
    use Rotation::*;

    match (from, to) {
        (Spawn, Right) => I_0R,
        (Right, Spawn) => I_R0,
        (Right, Two) => I_R2,
        (Two, Right) => I_2R,
        (Two, Left) => I_2L,
        (Left, Two) => I_L2,
        (Left, Spawn) => I_L0,
        (Spawn, Left) => I_0L,
        _ => NO_KICKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [Rotation; 4] = [Rotation::Spawn, Rotation::Right, Rotation::Two, Rotation::Left];

    #[test]
    fn test_kick_count() {
        for piece in TetrominoType::all() {
            for from in STATES {
                for to in [from.cw(), from.ccw()] {
                    let kicks = get_wall_kicks(piece, from, to);
                    let expected = if piece == TetrominoType::O { 0 } else { 4 };
                    assert_eq!(kicks.len(), expected, "{piece} {}", kick_key(from, to));
                }
            }
        }
    }

    #[test]
    fn test_no_identity_kick() {
        for piece in TetrominoType::all() {
            for from in STATES {
                for to in [from.cw(), from.ccw()] {
                    assert!(!get_wall_kicks(piece, from, to).contains(&(0, 0)));
                }
            }
        }
    }

    #[test]
    fn test_reverse_transition_negates_kicks() {
        // SRS tables are antisymmetric: A→B offsets are the negation of B→A
        for piece in [TetrominoType::I, TetrominoType::T] {
            for from in STATES {
                let to = from.cw();
                let forward = get_wall_kicks(piece, from, to);
                let back = get_wall_kicks(piece, to, from);
                let negated: Vec<Kick> = back.iter().map(|&(dx, dy)| (-dx, -dy)).collect();
                assert_eq!(forward, negated.as_slice(), "{piece} {}", kick_key(from, to));
            }
        }
    }

    #[test]
    fn test_table_selected_by_piece_type() {
        assert_eq!(get_wall_kicks(TetrominoType::I, Rotation::Spawn, Rotation::Right), I_0R);
        assert_eq!(get_wall_kicks(TetrominoType::I, Rotation::Spawn, Rotation::Left), I_0L);
        let jlstz = [
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ];
        for piece in jlstz {
            assert_eq!(get_wall_kicks(piece, Rotation::Spawn, Rotation::Right), JLSTZ_0R);
            assert_eq!(get_wall_kicks(piece, Rotation::Spawn, Rotation::Left), JLSTZ_0L);
        }
        assert_eq!(get_wall_kicks(TetrominoType::I, Rotation::Spawn, Rotation::Right)[0], (-2, 0));
        assert_eq!(get_wall_kicks(TetrominoType::T, Rotation::Spawn, Rotation::Right)[0], (-1, 0));
    }

    #[test]
    fn test_non_adjacent_transitions_have_no_kicks() {
        assert!(get_wall_kicks(TetrominoType::T, Rotation::Spawn, Rotation::Two).is_empty());
        assert!(get_wall_kicks(TetrominoType::I, Rotation::Right, Rotation::Right).is_empty());
    }

    #[test]
    fn test_kick_key() {
        assert_eq!(kick_key(Rotation::Spawn, Rotation::Right), "0R");
        assert_eq!(kick_key(Rotation::Left, Rotation::Two), "L2");
    }
}
