//! Pawn candidate generation.
//!
//! One step forward onto an empty square, a double step while `has_moved` is
//! false and both squares are empty, and diagonal captures onto enemy
//! squares. There is no en-passant in this rule set.

use crate::game_state::chess_rules::forward_direction;
use crate::game_state::chess_types::{Board, BoardLocation, Piece};
use crate::move_generation::move_shared::offset_location;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

pub fn generate_pawn_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    let dir = forward_direction(piece.color);

    // Forward steps.
    if let Some(one_ahead) = offset_location(location, dir, 0) {
        if board.view(one_ahead).is_none() {
            out.push(CandidateMove::new(one_ahead, MoveKind::Move));
            if !piece.has_moved {
                if let Some(two_ahead) = offset_location(location, 2 * dir, 0) {
                    if board.view(two_ahead).is_none() {
                        out.push(CandidateMove::new(two_ahead, MoveKind::Move));
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for d_col in [-1, 1] {
        if let Some(target) = offset_location(location, dir, d_col) {
            if let Some(occupant) = board.view(target) {
                if occupant.color != piece.color {
                    out.push(CandidateMove::new(target, MoveKind::Capture));
                }
            }
        }
    }
}
