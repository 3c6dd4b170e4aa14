//! Bishop candidate generation: diagonal slides.

use crate::game_state::chess_types::{Board, BoardLocation, Piece};
use crate::move_generation::move_shared::add_slide;
use crate::moves::move_descriptions::{CandidateMove, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        add_slide(board, piece.color, location, d_row, d_col, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn open_board_bishop_covers_both_diagonals() {
        let mut board = Board::default();
        let bishop = Piece::new(PieceKind::Bishop, Color::Light, 1);
        *board.at((4, 4)) = Some(bishop);

        let mut out = Vec::new();
        generate_bishop_moves(&board, (4, 4), &bishop, &mut out);
        assert_eq!(out.len(), 13);
        assert!(out.iter().all(|m| {
            let (row, col) = m.destination;
            (row - 4).abs() == (col - 4).abs()
        }));
    }

    #[test]
    fn ray_never_continues_past_a_blocker() {
        let mut board = Board::default();
        let bishop = Piece::new(PieceKind::Bishop, Color::Light, 1);
        *board.at((4, 4)) = Some(bishop);
        *board.at((2, 2)) = Some(Piece::new(PieceKind::Pawn, Color::Dark, 1));

        let mut out = Vec::new();
        generate_bishop_moves(&board, (4, 4), &bishop, &mut out);
        assert!(out
            .iter()
            .any(|m| m.destination == (2, 2) && m.kind == MoveKind::Capture));
        assert!(!out.iter().any(|m| m.destination == (1, 1)));
        assert!(!out.iter().any(|m| m.destination == (0, 0)));
    }
}
