//! Move/capture resolver.
//!
//! Applies one committed candidate move to a board, returning the post-move
//! snapshot plus a summary of what happened (points to award, promotion,
//! shield negation). The input board is never mutated; the resolver clones it
//! and edits the clone, so callers keep an untouched pre-move snapshot.
//!
//! The `Err(String)` paths are invariant violations (moving from an empty
//! square, teleporting without a charge) that cannot be reached through the
//! session command surface, which only commits generated candidates.

use crate::game_state::chess_rules::{promotion_row, CAPTURE_AWARD, KING_CAPTURE_AWARD};
use crate::game_state::chess_types::{Board, BoardLocation, PieceKind};
use crate::moves::move_descriptions::MoveKind;

/// What resolving one move did, beyond the board change itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Points to credit the moving side (capture awards only; the win bonus
    /// is the state machine's business).
    pub points_awarded: i32,
    /// A pawn reached its promotion row and became a queen.
    pub promoted: bool,
    /// The defender's shield absorbed this capture; the attacker stayed put.
    pub shield_consumed: bool,
}

/// Resolves `kind` from `from` to `to` against `board`.
pub fn apply_move(
    board: &Board,
    from: BoardLocation,
    to: BoardLocation,
    kind: MoveKind,
) -> Result<(Board, MoveOutcome), String> {
    let mut piece = board
        .view(from)
        .ok_or_else(|| format!("no piece on from-square {:?}", from))?;
    let mut next = board.clone();
    let mut outcome = MoveOutcome::default();

    match kind {
        MoveKind::Teleport => {
            if piece.abilities.teleports == 0 {
                return Err(format!("piece {} has no teleport charge", piece.id));
            }
            if next.view(to).is_some() {
                return Err(format!("teleport destination {:?} is occupied", to));
            }
            piece.abilities.teleports -= 1;
            piece.has_moved = true;
            *next.at(from) = None;
            *next.at(to) = Some(piece);
            // Teleports never capture and never promote.
            return Ok((next, outcome));
        }
        MoveKind::Capture => {
            let mut defender = next
                .view(to)
                .ok_or_else(|| format!("capture onto empty square {:?}", to))?;
            if defender.abilities.shield {
                // Shield negation: the defender loses its shield in place and
                // the attacker does not move. No points change hands; the
                // turn still ends normally upstream.
                defender.abilities.shield = false;
                *next.at(to) = Some(defender);
                outcome.shield_consumed = true;
                return Ok((next, outcome));
            }
            outcome.points_awarded = if defender.kind == PieceKind::King {
                KING_CAPTURE_AWARD
            } else {
                CAPTURE_AWARD
            };
        }
        MoveKind::Move => {
            if next.view(to).is_some() {
                return Err(format!("plain move onto occupied square {:?}", to));
            }
        }
    }

    // Relocation shared by plain moves and resolved captures.
    piece.has_moved = true;
    if piece.kind == PieceKind::Pawn && to.0 == promotion_row(piece.color) {
        piece.kind = PieceKind::Queen;
        outcome.promoted = true;
    }
    *next.at(from) = None;
    *next.at(to) = Some(piece);

    Ok((next, outcome))
}
