//! Knight candidate generation: the eight L-shaped steps.

use crate::game_state::chess_types::{Board, BoardLocation, Piece};
use crate::move_generation::move_shared::add_step;
use crate::moves::move_descriptions::{CandidateMove, KNIGHT_OFFSETS};

pub fn generate_knight_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        add_step(board, piece.color, location, d_row, d_col, out);
    }
}
