//! Session command surface.
//!
//! This is the engine's whole external interface: a presentation layer (or a
//! test) selects squares, asks for teleport mode, commits moves, buys
//! abilities, and starts or resets the match. Every command is a synchronous,
//! atomic transition on the owning `GameSession`; rejected commands leave the
//! session untouched.

use std::error::Error;
use std::fmt;

use crate::abilities::ability_catalog::AbilityKind;
use crate::abilities::purchase::{can_configure, purchase_ability, PurchaseResult};
use crate::game_state::chess_rules::WIN_AWARD;
use crate::game_state::chess_types::{in_bounds, BoardLocation, Color};
use crate::game_state::game_state::{GameSession, MatchPhase, Selection};
use crate::move_generation::move_apply::{apply_move, MoveOutcome};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_descriptions::CandidateMove;

/// Why a `commit_move` was rejected. Rejections never change state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The game has ended; no further moves are accepted.
    GameOver,
    /// Nothing is selected, or the selected square no longer holds a piece.
    NoSelection,
    /// The destination is not in the candidate list last shown for the
    /// selection.
    NotACandidate,
    /// The resolver rejected a generated candidate. Indicates an engine bug,
    /// not a caller mistake.
    Internal(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::GameOver => write!(f, "the game has already ended"),
            CommandError::NoSelection => write!(f, "no piece is selected"),
            CommandError::NotACandidate => {
                write!(f, "the destination is not a legal candidate for the selection")
            }
            CommandError::Internal(msg) => write!(f, "internal resolver error: {msg}"),
        }
    }
}

impl Error for CommandError {}

/// Result of a successful `commit_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub outcome: MoveOutcome,
    /// The post-move board was missing a king, ending the game.
    pub ended: bool,
    pub winner: Option<Color>,
}

impl GameSession {
    /// Selects the piece on `(row, col)` and returns its candidate moves.
    ///
    /// Returns an empty list without touching the session for out-of-bounds
    /// squares, for enemy pieces during the active phase, and after the game
    /// has ended. Selecting an empty square clears the current selection
    /// (deselect). A successful selection always leaves teleport mode.
    pub fn select_square(&mut self, row: i8, col: i8) -> Vec<CandidateMove> {
        if self.match_state.phase == MatchPhase::Ended {
            return Vec::new();
        }
        let location: BoardLocation = (row, col);
        if !in_bounds(location) {
            return Vec::new();
        }
        let Some(piece) = *self.board.view(location) else {
            self.clear_selection();
            return Vec::new();
        };
        if self.match_state.phase == MatchPhase::Active && piece.color != self.match_state.turn {
            return Vec::new();
        }

        let candidates = generate_moves(&self.board, location, false);
        self.teleport_mode = false;
        self.selection = Some(Selection {
            location,
            candidates: candidates.clone(),
        });
        candidates
    }

    /// Switches the current selection into teleport mode and returns the
    /// teleport destinations. A no-op empty list is returned when nothing is
    /// selected, the piece is not configurable right now, or it has no
    /// teleport charge; the existing selection and candidates stay as-is.
    pub fn request_teleport(&mut self) -> Vec<CandidateMove> {
        if self.match_state.phase == MatchPhase::Ended {
            return Vec::new();
        }
        let Some(location) = self.selection.as_ref().map(|s| s.location) else {
            return Vec::new();
        };
        let Some(piece) = *self.board.view(location) else {
            return Vec::new();
        };
        if !can_configure(self, piece.color) || piece.abilities.teleports == 0 {
            return Vec::new();
        }

        let candidates = generate_moves(&self.board, location, true);
        self.teleport_mode = true;
        self.selection = Some(Selection {
            location,
            candidates: candidates.clone(),
        });
        candidates
    }

    /// Commits a move of the selected piece to `(row, col)`.
    ///
    /// The destination must be one of the candidates stored on the selection
    /// (normal or teleport, depending on the current mode). On success the
    /// board advances, capture points are credited, the selection is cleared,
    /// the win check runs, and the turn flips when the game is active and did
    /// not just end. Pre-game moves consume no turn.
    pub fn commit_move(&mut self, row: i8, col: i8) -> Result<CommittedMove, CommandError> {
        if self.match_state.phase == MatchPhase::Ended {
            return Err(CommandError::GameOver);
        }
        let selection = self.selection.as_ref().ok_or(CommandError::NoSelection)?;
        let from = selection.location;
        let candidate = selection
            .candidates
            .iter()
            .find(|candidate| candidate.destination == (row, col))
            .copied()
            .ok_or(CommandError::NotACandidate)?;
        let mover = self
            .board
            .view(from)
            .ok_or(CommandError::NoSelection)?
            .color;

        let (next_board, outcome) = apply_move(&self.board, from, candidate.destination, candidate.kind)
            .map_err(CommandError::Internal)?;

        self.board = next_board;
        if outcome.points_awarded > 0 {
            self.match_state.award(mover, outcome.points_awarded);
        }
        self.clear_selection();

        let winner = self.check_for_winner();
        let ended = winner.is_some();
        if !ended && self.match_state.phase == MatchPhase::Active {
            self.match_state.turn = self.match_state.turn.opposite();
        }

        Ok(CommittedMove {
            outcome,
            ended,
            winner,
        })
    }

    /// Buys an ability for the selected piece. See `abilities::purchase`.
    pub fn purchase_ability(&mut self, kind: AbilityKind) -> PurchaseResult {
        purchase_ability(self, kind)
    }

    /// Leaves the pre-game configuration window. Light always moves first.
    pub fn start_game(&mut self) {
        if self.match_state.phase == MatchPhase::PreGame {
            self.match_state.phase = MatchPhase::Active;
            self.match_state.turn = Color::Light;
        }
    }

    /// Reinitializes the whole session: canonical board, points 10/10,
    /// pre-game phase, no winner, no selection. Available from any state.
    pub fn reset(&mut self) {
        *self = GameSession::new_game();
    }

    /// Ends the game if either king has left the board. The survivor is
    /// declared winner, credited the win bonus (on top of any king-capture
    /// award already granted), and shown as the side to move.
    fn check_for_winner(&mut self) -> Option<Color> {
        let light_king = self.board.find_king(Color::Light).is_some();
        let dark_king = self.board.find_king(Color::Dark).is_some();
        if light_king && dark_king {
            return None;
        }

        let winner = if light_king { Color::Light } else { Color::Dark };
        self.match_state.phase = MatchPhase::Ended;
        self.match_state.winner = Some(winner);
        self.match_state.award(winner, WIN_AWARD);
        self.match_state.turn = winner;
        self.clear_selection();
        Some(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::purchase::PurchaseError;
    use crate::game_state::chess_types::PieceKind;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn fresh_pawn_double_step_scenario() {
        let mut session = GameSession::new_game();
        session.start_game();

        let candidates = session.select_square(6, 0);
        assert_eq!(candidates.len(), 2);

        let committed = session.commit_move(4, 0).unwrap();
        assert!(!committed.ended);
        assert!(session.board.view((6, 0)).is_none());
        let pawn = session.board.view((4, 0)).unwrap();
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert!(pawn.has_moved);
        assert_eq!(session.match_state.turn, Color::Dark);
        assert!(session.selection.is_none());
    }

    #[test]
    fn selecting_an_enemy_piece_in_active_phase_returns_nothing() {
        let mut session = GameSession::new_game();
        session.start_game();
        assert!(session.select_square(1, 0).is_empty());
        // Out of bounds is also silently empty.
        assert!(session.select_square(9, 0).is_empty());
    }

    #[test]
    fn selecting_an_empty_square_deselects() {
        let mut session = GameSession::new_game();
        session.select_square(6, 0);
        assert!(session.selection.is_some());
        assert!(session.select_square(4, 4).is_empty());
        assert!(session.selection.is_none());
    }

    #[test]
    fn committing_a_non_candidate_changes_nothing() {
        let mut session = GameSession::new_game();
        session.start_game();
        session.select_square(6, 0);
        let before = session.board.clone();
        assert_eq!(session.commit_move(3, 0), Err(CommandError::NotACandidate));
        assert_eq!(session.board, before);
        assert_eq!(session.match_state.turn, Color::Light);
    }

    #[test]
    fn commit_without_selection_is_rejected() {
        let mut session = GameSession::new_game();
        session.start_game();
        assert_eq!(session.commit_move(4, 0), Err(CommandError::NoSelection));
    }

    #[test]
    fn pregame_moves_do_not_consume_turns() {
        let mut session = GameSession::new_game();
        session.select_square(6, 0);
        session.commit_move(4, 0).unwrap();
        assert_eq!(session.match_state.phase, MatchPhase::PreGame);
        assert_eq!(session.match_state.turn, Color::Light);

        // Either side may move during pre-game.
        session.select_square(1, 0);
        session.commit_move(3, 0).unwrap();
        assert_eq!(session.match_state.turn, Color::Light);
    }

    #[test]
    fn dash_purchase_grants_new_orthogonal_candidates() {
        let mut session = GameSession::new_game();
        // A bishop has no orthogonal moves at all from its home square.
        let base = session.select_square(7, 2);
        assert!(base.is_empty());

        session.purchase_ability(AbilityKind::Dash).unwrap();
        assert_eq!(session.match_state.points(Color::Light), 4);

        // Dash cannot help while boxed in; clear the pawn in front first.
        *session.board.at((6, 2)) = None;
        let dashed = session.select_square(7, 2);
        assert!(dashed.iter().any(|m| m.destination == (6, 2)));
        assert!(dashed.iter().any(|m| m.destination == (5, 2)));
    }

    #[test]
    fn shield_negation_flips_the_turn_without_points() {
        let mut session = GameSession::new_game();
        // Stage a light rook next to a shielded dark pawn.
        let rook = session.board.view((7, 0)).map(|mut rook| {
            rook.has_moved = true;
            rook
        });
        *session.board.at((4, 0)) = rook;
        *session.board.at((7, 0)) = None;
        session.board.at((1, 0)).as_mut().unwrap().abilities.shield = true;
        session.start_game();

        session.select_square(4, 0);
        let committed = session.commit_move(1, 0).unwrap();
        assert!(committed.outcome.shield_consumed);
        assert_eq!(committed.outcome.points_awarded, 0);
        assert!(!committed.ended);

        // Attacker stayed, defender survives shieldless, turn flipped.
        assert_eq!(session.board.view((4, 0)).unwrap().kind, PieceKind::Rook);
        let defender = session.board.view((1, 0)).unwrap();
        assert_eq!(defender.color, Color::Dark);
        assert!(!defender.abilities.shield);
        assert_eq!(session.match_state.points(Color::Light), 10);
        assert_eq!(session.match_state.turn, Color::Dark);
    }

    #[test]
    fn capturing_the_king_ends_and_freezes_the_game() {
        let mut session = GameSession::new_game();
        // Put a light queen one step from the dark king.
        let queen = session.board.view((7, 3)).map(|mut queen| {
            queen.has_moved = true;
            queen
        });
        *session.board.at((2, 4)) = queen;
        *session.board.at((7, 3)) = None;
        *session.board.at((1, 4)) = None;
        session.start_game();

        session.select_square(2, 4);
        let committed = session.commit_move(0, 4).unwrap();
        assert!(committed.ended);
        assert_eq!(committed.winner, Some(Color::Light));
        assert_eq!(session.match_state.phase, MatchPhase::Ended);
        assert_eq!(session.match_state.winner, Some(Color::Light));
        // +20 for capturing the king, +20 win bonus.
        assert_eq!(session.match_state.points(Color::Light), 50);
        assert_eq!(session.match_state.turn, Color::Light);

        // All further actions are rejected.
        assert!(session.select_square(0, 4).is_empty());
        assert_eq!(session.commit_move(1, 4), Err(CommandError::GameOver));
        assert_eq!(
            session.purchase_ability(AbilityKind::Shield),
            Err(PurchaseError::NotSelectable)
        );
        assert!(session.request_teleport().is_empty());
    }

    #[test]
    fn teleport_commit_consumes_one_charge() {
        let mut session = GameSession::new_game();
        session.select_square(7, 1);
        session.purchase_ability(AbilityKind::Teleport).unwrap();
        session.start_game();

        session.select_square(7, 1);
        let teleports = session.request_teleport();
        assert!(session.teleport_mode);
        assert!(!teleports.is_empty());
        assert!(teleports.iter().all(|m| m.kind == MoveKind::Teleport));

        let destination = teleports[0].destination;
        let committed = session.commit_move(destination.0, destination.1).unwrap();
        assert!(!committed.outcome.shield_consumed);
        let knight = session.board.view(destination).unwrap();
        assert_eq!(knight.abilities.teleports, 0);
        assert!(!session.teleport_mode);
        assert_eq!(session.match_state.turn, Color::Dark);
    }

    #[test]
    fn teleport_request_without_charge_is_a_no_op() {
        let mut session = GameSession::new_game();
        let normal = session.select_square(7, 1);
        assert!(session.request_teleport().is_empty());
        assert!(!session.teleport_mode);
        // The stored normal candidates are untouched.
        assert_eq!(
            session.selection.as_ref().unwrap().candidates,
            normal
        );
    }

    #[test]
    fn reset_restores_the_initial_session_from_any_state() {
        let mut session = GameSession::new_game();
        session.select_square(6, 4);
        session.purchase_ability(AbilityKind::Shield).unwrap();
        session.start_game();
        session.select_square(6, 0);
        session.commit_move(4, 0).unwrap();

        session.reset();
        assert_eq!(session.match_state.phase, MatchPhase::PreGame);
        assert_eq!(session.match_state.points(Color::Light), 10);
        assert_eq!(session.match_state.points(Color::Dark), 10);
        assert_eq!(session.match_state.winner, None);
        assert!(session.selection.is_none());
        assert!(!session.teleport_mode);
        assert_eq!(session.board, crate::game_state::chess_rules::starting_board());
    }

    #[test]
    fn start_game_sets_light_to_move() {
        let mut session = GameSession::new_game();
        session.match_state.turn = Color::Dark;
        session.start_game();
        assert_eq!(session.match_state.phase, MatchPhase::Active);
        assert_eq!(session.match_state.turn, Color::Light);
    }
}
