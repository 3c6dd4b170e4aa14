//! Ability-granted candidate generation.
//!
//! Ability moves are purely additive on top of a piece's base moves and do
//! not depend on the piece kind. A piece may hold several abilities at once;
//! each contributes its candidates independently, and a duplicate destination
//! (a knight with Jumper, say) is harmless.

use crate::game_state::chess_rules::TELEPORT_RANGE;
use crate::game_state::chess_types::{Board, BoardLocation, Piece, BOARD_SIZE};
use crate::move_generation::move_shared::{add_step, offset_location};
use crate::moves::move_descriptions::{
    CandidateMove, MoveKind, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

/// Jumper: the eight knight-style steps, whatever the piece kind.
pub fn generate_jumper_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        add_step(board, piece.color, location, d_row, d_col, out);
    }
}

/// Dash: up to two squares along each orthogonal direction. The adjacent
/// square contributes a move only when empty; only then is the two-away
/// square considered, as a move when empty or a capture when enemy-occupied.
/// Any occupant of the adjacent square blocks the dash entirely.
pub fn generate_dash_moves(
    board: &Board,
    location: BoardLocation,
    piece: &Piece,
    out: &mut Vec<CandidateMove>,
) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        let Some(first) = offset_location(location, d_row, d_col) else {
            continue;
        };
        if board.view(first).is_some() {
            continue;
        }
        out.push(CandidateMove::new(first, MoveKind::Move));

        let Some(second) = offset_location(location, 2 * d_row, 2 * d_col) else {
            continue;
        };
        match board.view(second) {
            None => out.push(CandidateMove::new(second, MoveKind::Move)),
            Some(occupant) if occupant.color != piece.color => {
                out.push(CandidateMove::new(second, MoveKind::Capture));
            }
            Some(_) => {}
        }
    }
}

/// Teleport destinations: every empty square within `TELEPORT_RANGE`
/// Manhattan distance of the source. The source square itself is occupied by
/// the teleporting piece, so it never appears.
pub fn teleport_destinations(board: &Board, location: BoardLocation) -> Vec<CandidateMove> {
    let mut out = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let distance = (row - location.0).abs() + (col - location.1).abs();
            if distance <= TELEPORT_RANGE && board.view((row, col)).is_none() {
                out.push(CandidateMove::new((row, col), MoveKind::Teleport));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn jumper_gives_a_pawn_knight_steps() {
        let mut board = Board::default();
        let mut pawn = Piece::new(PieceKind::Pawn, Color::Light, 1);
        pawn.abilities.jumper = true;
        *board.at((4, 4)) = Some(pawn);

        let mut out = Vec::new();
        generate_jumper_moves(&board, (4, 4), &pawn, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().any(|m| m.destination == (2, 3)));
    }

    #[test]
    fn dash_adds_one_and_two_square_orthogonal_moves() {
        let mut board = Board::default();
        let rook_less = Piece::new(PieceKind::Bishop, Color::Light, 1);
        *board.at((4, 4)) = Some(rook_less);

        let mut out = Vec::new();
        generate_dash_moves(&board, (4, 4), &rook_less, &mut out);
        // Four directions, two squares each on an open board.
        assert_eq!(out.len(), 8);
        assert!(out.iter().any(|m| m.destination == (4, 6)));
        assert!(out.iter().any(|m| m.destination == (2, 4)));
    }

    #[test]
    fn occupied_adjacent_square_blocks_the_whole_dash_direction() {
        let mut board = Board::default();
        let dasher = Piece::new(PieceKind::Knight, Color::Light, 1);
        *board.at((4, 4)) = Some(dasher);
        // Even an enemy piece on the first square blocks the dash; dash is
        // not a capture on the first square.
        *board.at((4, 5)) = Some(Piece::new(PieceKind::Pawn, Color::Dark, 1));

        let mut out = Vec::new();
        generate_dash_moves(&board, (4, 4), &dasher, &mut out);
        assert!(!out.iter().any(|m| m.destination == (4, 5)));
        assert!(!out.iter().any(|m| m.destination == (4, 6)));
    }

    #[test]
    fn dash_second_square_may_capture() {
        let mut board = Board::default();
        let dasher = Piece::new(PieceKind::Knight, Color::Light, 1);
        *board.at((4, 4)) = Some(dasher);
        *board.at((4, 6)) = Some(Piece::new(PieceKind::Pawn, Color::Dark, 1));

        let mut out = Vec::new();
        generate_dash_moves(&board, (4, 4), &dasher, &mut out);
        assert!(out
            .iter()
            .any(|m| m.destination == (4, 6) && m.kind == MoveKind::Capture));
    }

    #[test]
    fn teleport_area_is_exactly_the_empty_manhattan_disc() {
        let mut board = Board::default();
        *board.at((4, 4)) = Some(Piece::new(PieceKind::Queen, Color::Light, 1));
        *board.at((4, 5)) = Some(Piece::new(PieceKind::Pawn, Color::Dark, 1));

        let out = teleport_destinations(&board, (4, 4));
        assert!(out.iter().all(|m| m.kind == MoveKind::Teleport));

        // Both directions: each candidate is an empty in-range square, and
        // every empty in-range square on the board is a candidate.
        let mut expected = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let in_disc = (row - 4).abs() + (col - 4).abs() <= TELEPORT_RANGE
                    && board.view((row, col)).is_none();
                assert_eq!(
                    out.iter().any(|m| m.destination == (row, col)),
                    in_disc,
                    "square ({row},{col})"
                );
                if in_disc {
                    expected += 1;
                }
            }
        }
        assert_eq!(out.len(), expected);

        // Source and the occupied neighbor are excluded; (4,7) is at distance
        // 3 and included, (4,8) would be off board.
        assert!(!out.iter().any(|m| m.destination == (4, 4)));
        assert!(!out.iter().any(|m| m.destination == (4, 5)));
        assert!(out.iter().any(|m| m.destination == (4, 7)));
    }
}
