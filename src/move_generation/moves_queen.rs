//! Queen candidate generation: orthogonal plus diagonal slides.

use crate::game_state::chess_types::{Board, BoardLocation, Piece};
use crate::move_generation::move_shared::add_slide;
use crate::moves::move_descriptions::{CandidateMove, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn generate_queen_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        add_slide(board, piece.color, location, d_row, d_col, out);
    }
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        add_slide(board, piece.color, location, d_row, d_col, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn open_board_queen_is_rook_plus_bishop() {
        let mut board = Board::default();
        let queen = Piece::new(PieceKind::Queen, Color::Light, 1);
        *board.at((4, 4)) = Some(queen);

        let mut out = Vec::new();
        generate_queen_moves(&board, (4, 4), &queen, &mut out);
        assert_eq!(out.len(), 14 + 13);
    }

    #[test]
    fn queen_rays_stop_independently() {
        let mut board = Board::default();
        let queen = Piece::new(PieceKind::Queen, Color::Light, 1);
        *board.at((4, 4)) = Some(queen);
        *board.at((4, 5)) = Some(Piece::new(PieceKind::Pawn, Color::Light, 2));

        let mut out = Vec::new();
        generate_queen_moves(&board, (4, 4), &queen, &mut out);
        // The blocked east ray contributes nothing; the other seven rays are
        // unaffected.
        assert!(!out.iter().any(|m| m.destination.0 == 4 && m.destination.1 > 4));
        assert!(out.iter().any(|m| m.destination == (0, 0)));
        assert!(out.iter().any(|m| m.destination == (4, 0)));
    }
}
