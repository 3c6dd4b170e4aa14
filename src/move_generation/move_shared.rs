//! Helpers shared by the per-piece candidate generators.

use crate::game_state::chess_types::{in_bounds, Board, BoardLocation, Color};
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

/// Applies `(d_row, d_col)` to a location, returning `None` off the board.
#[inline]
pub fn offset_location(location: BoardLocation, d_row: i8, d_col: i8) -> Option<BoardLocation> {
    let target = (location.0 + d_row, location.1 + d_col);
    if in_bounds(target) {
        Some(target)
    } else {
        None
    }
}

/// Single-square step: pushes a move onto an empty square or a capture onto
/// an enemy square. Own pieces and off-board targets add nothing.
pub fn add_step(
    board: &Board,
    mover_color: Color,
    from: BoardLocation,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<CandidateMove>,
) {
    let Some(target) = offset_location(from, d_row, d_col) else {
        return;
    };
    match board.view(target) {
        None => out.push(CandidateMove::new(target, MoveKind::Move)),
        Some(occupant) if occupant.color != mover_color => {
            out.push(CandidateMove::new(target, MoveKind::Capture));
        }
        Some(_) => {}
    }
}

/// Repeated-step slide along one ray: moves over empty squares, a capture on
/// the first enemy square (inclusive), and a hard stop at the board edge or
/// the first own piece (exclusive).
pub fn add_slide(
    board: &Board,
    mover_color: Color,
    from: BoardLocation,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<CandidateMove>,
) {
    let mut cursor = from;
    while let Some(target) = offset_location(cursor, d_row, d_col) {
        match board.view(target) {
            None => out.push(CandidateMove::new(target, MoveKind::Move)),
            Some(occupant) => {
                if occupant.color != mover_color {
                    out.push(CandidateMove::new(target, MoveKind::Capture));
                }
                return;
            }
        }
        cursor = target;
    }
}
