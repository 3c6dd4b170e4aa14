//! King candidate generation: the eight adjacent steps.
//!
//! There is no castling and no king-safety filtering in this rule set; a king
//! may step onto an attacked square and the game only ends when a king is
//! actually captured.

use crate::game_state::chess_types::{Board, BoardLocation, Piece};
use crate::move_generation::move_shared::add_step;
use crate::moves::move_descriptions::{CandidateMove, KING_OFFSETS};

pub fn generate_king_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in KING_OFFSETS {
        add_step(board, piece.color, location, d_row, d_col, out);
    }
}
