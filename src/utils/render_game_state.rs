//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the stdio
//! front-end. Rows are printed top-down the way the engine indexes them
//! (row 0 at the top), with ability markers after each occupied square.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};
use crate::game_state::game_state::{GameSession, MatchPhase};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    0  1  2  3  4  5  6  7\n");

    for row in 0..8i8 {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..8i8 {
            out.push(' ');
            match board.view((row, col)) {
                Some(piece) => {
                    out.push(piece_to_unicode(piece.color, piece.kind));
                    out.push(ability_marker(piece));
                }
                None => out.push_str("· "),
            }
        }

        out.push('\n');
    }

    out
}

/// One-line session status: phase, points, side to move or winner.
pub fn render_status(session: &GameSession) -> String {
    let state = &session.match_state;
    match state.phase {
        MatchPhase::PreGame => format!(
            "pre-game | points: light {} dark {}",
            state.points(Color::Light),
            state.points(Color::Dark)
        ),
        MatchPhase::Active => format!(
            "{} to move | points: light {} dark {}",
            state.turn,
            state.points(Color::Light),
            state.points(Color::Dark)
        ),
        MatchPhase::Ended => match state.winner {
            Some(winner) => format!(
                "game over, {} wins | points: light {} dark {}",
                winner,
                state.points(Color::Light),
                state.points(Color::Dark)
            ),
            None => "game over".to_owned(),
        },
    }
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

/// Single-character ability tag: shield wins over jumper over dash over
/// teleport when a piece holds several, space when it holds none.
fn ability_marker(piece: &Piece) -> char {
    let abilities = piece.abilities;
    if abilities.shield {
        's'
    } else if abilities.jumper {
        'j'
    } else if abilities.dash {
        'd'
    } else if abilities.teleports > 0 {
        't'
    } else {
        ' '
    }
}
