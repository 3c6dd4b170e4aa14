//! Candidate-move vocabulary and shared offset tables.
//!
//! A candidate move is a destination plus a kind tag; the generator produces
//! them, the session stores them on the selection, and the resolver consumes
//! them. The offset tables here are shared between the base knight/king
//! generators and the ability augmentations (jumper reuses the knight
//! offsets, dash reuses the orthogonal directions).

use crate::game_state::chess_types::BoardLocation;

/// How a candidate move resolves when committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Relocation onto an empty square.
    Move,
    /// Relocation onto an enemy-occupied square (or a shield negation).
    Capture,
    /// Ability relocation onto an empty square, consuming one charge.
    Teleport,
}

/// One destination the selected piece may commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub destination: BoardLocation,
    pub kind: MoveKind,
}

impl CandidateMove {
    #[inline]
    pub const fn new(destination: BoardLocation, kind: MoveKind) -> Self {
        CandidateMove { destination, kind }
    }
}

/// The eight L-shaped knight offsets, also granted by the Jumper ability.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// The eight adjacent king offsets.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook slide directions, also used by the Dash ability.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop slide directions.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
