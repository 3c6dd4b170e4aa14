//! Ability purchase rules.
//!
//! A purchase targets the currently selected piece, debits the owner's
//! points, and passes no turn. Failures are typed so callers (tests,
//! alternate front-ends) can distinguish "nothing selected" from "not your
//! piece" from "too expensive" instead of getting a silent no-op.

use std::error::Error;
use std::fmt;

use crate::abilities::ability_catalog::{listing_for, AbilityKind};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameSession, MatchPhase};

pub type PurchaseResult = Result<(), PurchaseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// No piece is selected, or the selected square no longer holds a piece.
    NoSelection,
    /// The selection is not interactable: the game ended, or in the active
    /// phase the piece does not belong to the side to move.
    NotSelectable,
    /// The owner cannot afford the ability's cost.
    InsufficientPoints { needed: i32, available: i32 },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseError::NoSelection => write!(f, "no piece is selected"),
            PurchaseError::NotSelectable => write!(f, "the selected piece cannot be modified now"),
            PurchaseError::InsufficientPoints { needed, available } => {
                write!(f, "ability costs {needed} points but only {available} are available")
            }
        }
    }
}

impl Error for PurchaseError {}

/// Whether the piece color is allowed to be configured right now.
///
/// Pre-game is the open configuration window: both sides may be modified
/// regardless of `turn`. Once active, only the side to move; once ended,
/// nobody.
pub fn can_configure(session: &GameSession, piece_color: Color) -> bool {
    match session.match_state.phase {
        MatchPhase::PreGame => true,
        MatchPhase::Active => piece_color == session.match_state.turn,
        MatchPhase::Ended => false,
    }
}

/// Buys `kind` for the selected piece, mutating its ability block and
/// debiting the owner's points. The selection, board, and turn are otherwise
/// untouched, and on error nothing changes at all.
pub fn purchase_ability(session: &mut GameSession, kind: AbilityKind) -> PurchaseResult {
    // The shop closes when the game ends, whether or not a selection is
    // still around (the win check clears it anyway).
    if session.match_state.phase == MatchPhase::Ended {
        return Err(PurchaseError::NotSelectable);
    }
    let location = session
        .selection
        .as_ref()
        .map(|selection| selection.location)
        .ok_or(PurchaseError::NoSelection)?;
    let piece = session.board.view(location).ok_or(PurchaseError::NoSelection)?;

    if !can_configure(session, piece.color) {
        return Err(PurchaseError::NotSelectable);
    }

    let cost = listing_for(kind).cost;
    let available = session.match_state.points(piece.color);
    if available < cost {
        return Err(PurchaseError::InsufficientPoints {
            needed: cost,
            available,
        });
    }

    let owner = piece.color;
    if let Some(piece) = session.board.at(location).as_mut() {
        kind.apply(&mut piece.abilities);
    }
    session.match_state.debit(owner, cost);
    Ok(())
}
