//! Canonical rule constants and the standard starting layout.
//!
//! This module stores the static rule-related literals of the variant (point
//! economy values, teleport range) and builds the canonical starting board
//! used to initialize and reset a session.

use crate::game_state::chess_types::{Board, BoardLocation, Color, Piece, PieceKind};

/// Points both sides hold at the start of a match.
pub const STARTING_POINTS: i32 = 10;

/// Points credited for capturing an ordinary piece.
pub const CAPTURE_AWARD: i32 = 5;

/// Points credited for capturing a king.
pub const KING_CAPTURE_AWARD: i32 = 20;

/// Points credited to the surviving side when the game ends.
pub const WIN_AWARD: i32 = 20;

/// Maximum Manhattan distance a teleport charge can cover.
pub const TELEPORT_RANGE: i8 = 3;

/// Back-rank piece order shared by both sides.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Forward direction for the given color. Light moves toward row 0, Dark
/// toward row 7.
#[inline]
pub const fn forward_direction(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Row a pawn of the given color promotes on.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Builds the standard starting layout: pawns on rows 1 and 6, back ranks on
/// rows 0 and 7, every ability zeroed and `has_moved` false. Piece serials
/// count up per color in placement order, so ids are unique and stable.
pub fn starting_board() -> Board {
    let mut board = Board::default();
    let mut serials = [0u8; 2];

    let mut place = |board: &mut Board, kind: PieceKind, color: Color, location: BoardLocation| {
        serials[color.index()] += 1;
        *board.at(location) = Some(Piece::new(kind, color, serials[color.index()]));
    };

    for col in 0..8 {
        place(&mut board, PieceKind::Pawn, Color::Dark, (1, col));
        place(&mut board, PieceKind::Pawn, Color::Light, (6, col));
    }
    for (col, kind) in BACK_RANK.iter().enumerate() {
        place(&mut board, *kind, Color::Dark, (0, col as i8));
        place(&mut board, *kind, Color::Light, (7, col as i8));
    }

    board
}
