//! Full candidate-move generation pipeline.
//!
//! Orchestrates the per-kind base generators and the ability augmentations
//! into the single pure entry point the session layer calls. Depends only on
//! its inputs; never mutates the board.

use crate::game_state::chess_types::{in_bounds, Board, BoardLocation, PieceKind};
use crate::move_generation::moves_abilities::{
    generate_dash_moves, generate_jumper_moves, teleport_destinations,
};
use crate::move_generation::moves_bishop::generate_bishop_moves;
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_queen::generate_queen_moves;
use crate::move_generation::moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::CandidateMove;

/// Generates every candidate move for the piece on `location`.
///
/// With `teleport_mode` set and a teleport charge available, the result is
/// the teleport destination set and nothing else; with no charge it is empty.
/// Otherwise the result is the piece's base moves followed by its ability
/// augmentations. An empty or out-of-bounds square yields an empty list.
pub fn generate_moves(
    board: &Board,
    location: BoardLocation,
    teleport_mode: bool,
) -> Vec<CandidateMove> {
    if !in_bounds(location) {
        return Vec::new();
    }
    let Some(piece) = board.view(location) else {
        return Vec::new();
    };

    if teleport_mode {
        if piece.abilities.teleports > 0 {
            return teleport_destinations(board, location);
        }
        return Vec::new();
    }

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, location, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(board, location, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, location, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, location, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, location, piece, &mut out),
        PieceKind::King => generate_king_moves(board, location, piece, &mut out),
    }

    if piece.abilities.jumper {
        generate_jumper_moves(board, location, piece, &mut out);
    }
    if piece.abilities.dash {
        generate_dash_moves(board, location, piece, &mut out);
    }

    out
}
