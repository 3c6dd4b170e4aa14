//! Random self-play smoke driver.
//!
//! Plays one full match by choosing uniformly random candidate moves through
//! the public session API, after giving each side one random pre-game ability
//! purchase. Useful for exercising the whole command surface end to end and
//! for eyeballing transcripts; it is not an opponent of any strength.

use rand::prelude::IndexedRandom;

use arcane_chess::abilities::ability_catalog::{AbilityKind, ABILITY_CATALOG};
use arcane_chess::game_state::chess_types::{BoardLocation, Color};
use arcane_chess::game_state::game_state::GameSession;
use arcane_chess::moves::move_descriptions::CandidateMove;
use arcane_chess::utils::render_game_state::{render_board, render_status};
use arcane_chess::utils::transcript::MatchTranscript;

const MAX_PLIES: usize = 400;

fn main() {
    let mut rng = rand::rng();
    let mut session = GameSession::new_game();
    let mut transcript = MatchTranscript::new();

    // One random pre-game purchase per side, when affordable.
    for color in [Color::Light, Color::Dark] {
        buy_random_ability(&mut session, &mut transcript, color, &mut rng);
    }

    session.start_game();

    for _ in 0..MAX_PLIES {
        let turn = session.match_state.turn;
        let Some((from, candidate)) = pick_random_move(&mut session, turn, &mut rng) else {
            println!("{} has no moves; stopping", turn);
            break;
        };

        session.select_square(from.0, from.1);
        match session.commit_move(candidate.destination.0, candidate.destination.1) {
            Ok(committed) => {
                transcript.record_move(
                    turn,
                    from,
                    candidate.destination,
                    candidate.kind,
                    &committed.outcome,
                );
                if committed.ended {
                    break;
                }
            }
            Err(err) => {
                // Generated candidates should always commit.
                eprintln!("unexpected rejection: {err}");
                break;
            }
        }
    }

    let result = match session.match_state.winner {
        Some(winner) => winner.to_string(),
        None => "*".to_owned(),
    };
    print!("{}", render_board(&session.board));
    println!("{}", render_status(&session));
    println!();
    print!("{}", transcript.write(&result));
}

fn buy_random_ability(
    session: &mut GameSession,
    transcript: &mut MatchTranscript,
    color: Color,
    rng: &mut impl rand::Rng,
) {
    let affordable: Vec<AbilityKind> = ABILITY_CATALOG
        .iter()
        .filter(|listing| listing.cost <= session.match_state.points(color))
        .map(|listing| listing.kind)
        .collect();
    let Some(kind) = affordable.choose(rng).copied() else {
        return;
    };

    let own_pieces: Vec<BoardLocation> = session
        .board
        .iter_pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(location, _)| location)
        .collect();
    let Some(location) = own_pieces.choose(rng).copied() else {
        return;
    };

    session.select_square(location.0, location.1);
    if session.purchase_ability(kind).is_ok() {
        transcript.record_purchase(color, location, kind);
    }
    session.clear_selection();
}

fn pick_random_move(
    session: &mut GameSession,
    turn: Color,
    rng: &mut impl rand::Rng,
) -> Option<(BoardLocation, CandidateMove)> {
    let own_pieces: Vec<BoardLocation> = session
        .board
        .iter_pieces()
        .filter(|(_, piece)| piece.color == turn)
        .map(|(location, _)| location)
        .collect();

    let mut playable: Vec<(BoardLocation, CandidateMove)> = Vec::new();
    for from in own_pieces {
        for candidate in session.select_square(from.0, from.1) {
            playable.push((from, candidate));
        }
    }
    session.clear_selection();

    playable.choose(rng).copied()
}
