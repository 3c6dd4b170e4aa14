//! Crate root module declarations for the Arcane Chess rules engine.
//!
//! Arcane Chess is standard chess with a point economy: either side can spend
//! points on per-piece abilities (Shield, Jumper, Dash, Teleport) that change
//! what the move generator produces and how captures resolve. There is no
//! check or checkmate concept; the game ends when a king is captured.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! abilities, the session command surface, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
    pub mod moves_abilities;
    pub mod moves_bishop;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_queen;
    pub mod moves_rook;
}

pub mod abilities {
    pub mod ability_catalog;
    pub mod purchase;
}

pub mod session {
    pub mod commands;
}

pub mod utils {
    pub mod render_game_state;
    pub mod transcript;
}
