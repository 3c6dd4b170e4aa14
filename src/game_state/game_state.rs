//! Central session state for one match.
//!
//! `GameSession` is the single owner of all mutable state: the board, the
//! match-level flags (phase, turn, points, winner), and the transient
//! selection the command surface operates on. Commands live in
//! `session::commands`; this module only defines the model and its
//! invariant-preserving accessors.

use crate::game_state::chess_rules::{starting_board, STARTING_POINTS};
use crate::game_state::chess_types::{Board, BoardLocation, Color};
use crate::moves::move_descriptions::CandidateMove;

/// Match lifecycle phase.
///
/// `PreGame` is the configuration window: both sides may select pieces, buy
/// abilities, and rearrange freely without consuming turns. `Active` enforces
/// turn ownership. `Ended` is terminal and rejects every further action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    PreGame,
    Active,
    Ended,
}

/// Turn, economy, and outcome flags for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub phase: MatchPhase,
    /// Side to move. Meaningful once the phase is `Active`; set to the winner
    /// for display once the game ends.
    pub turn: Color,
    // [Color::index()]
    points: [i32; 2],
    pub winner: Option<Color>,
}

impl MatchState {
    pub fn new() -> Self {
        MatchState {
            phase: MatchPhase::PreGame,
            turn: Color::Light,
            points: [STARTING_POINTS; 2],
            winner: None,
        }
    }

    #[inline]
    pub fn points(&self, color: Color) -> i32 {
        self.points[color.index()]
    }

    #[inline]
    pub fn award(&mut self, color: Color, amount: i32) {
        self.points[color.index()] += amount;
    }

    /// Debits `amount` from `color`. Callers check affordability first; this
    /// only moves the number.
    #[inline]
    pub fn debit(&mut self, color: Color, amount: i32) {
        self.points[color.index()] -= amount;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// The currently chosen piece plus the candidate list computed for it.
///
/// Commit validation runs against this stored list, so a committed move is
/// always one the caller was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub location: BoardLocation,
    pub candidates: Vec<CandidateMove>,
}

/// One full game: board, match flags, and transient selection state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub match_state: MatchState,
    pub selection: Option<Selection>,
    /// When set, the candidate list for the selected piece holds teleport
    /// destinations instead of normal moves. Cleared whenever the selection
    /// changes or a move commits.
    pub teleport_mode: bool,
}

impl GameSession {
    /// Fresh session: canonical starting board, points 10/10, pre-game.
    pub fn new_game() -> Self {
        GameSession {
            board: starting_board(),
            match_state: MatchState::new(),
            selection: None,
            teleport_mode: false,
        }
    }

    /// Clears the selection and leaves teleport mode.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.teleport_mode = false;
    }
}
