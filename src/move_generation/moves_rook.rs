//! Rook candidate generation: orthogonal slides.

use crate::game_state::chess_types::{Board, BoardLocation, Piece};
use crate::move_generation::move_shared::add_slide;
use crate::moves::move_descriptions::{CandidateMove, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        add_slide(board, piece.color, location, d_row, d_col, out);
    }
}
