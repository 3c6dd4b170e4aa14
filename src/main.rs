//! Stdio front-end for the Arcane Chess engine.
//!
//! A small synchronous command loop standing in for a real presentation
//! layer: it renders engine state as text and forwards one command per line
//! to the session API. The engine itself never prints; everything shown here
//! goes through the public query surface.

use std::io::{self, BufRead, Write};

use arcane_chess::abilities::ability_catalog::{AbilityKind, ABILITY_CATALOG};
use arcane_chess::game_state::chess_types::Color;
use arcane_chess::game_state::game_state::GameSession;
use arcane_chess::moves::move_descriptions::CandidateMove;
use arcane_chess::utils::render_game_state::{render_board, render_status};
use arcane_chess::utils::transcript::MatchTranscript;

fn main() -> io::Result<()> {
    run_stdio_loop()
}

fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut cli = CliState::new();

    writeln!(stdout, "arcane_chess — type 'help' for commands")?;
    write!(stdout, "{}", render_board(&cli.session.board))?;
    writeln!(stdout, "{}", render_status(&cli.session))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = cli.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliState {
    session: GameSession,
    transcript: MatchTranscript,
}

impl CliState {
    fn new() -> Self {
        CliState {
            session: GameSession::new_game(),
            transcript: MatchTranscript::new(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "help" => {
                writeln!(out, "select <row> <col>   pick a piece and list its moves")?;
                writeln!(out, "move <row> <col>     commit a listed destination")?;
                writeln!(out, "tele                 list teleport destinations instead")?;
                writeln!(out, "buy <ability>        buy an ability for the selection")?;
                writeln!(out, "catalog              show the ability catalog")?;
                writeln!(out, "start | reset | show | points | log | quit")?;
            }
            "select" => match parse_square(&mut parts) {
                Some((row, col)) => {
                    let candidates = self.session.select_square(row, col);
                    print_candidates(out, &candidates)?;
                }
                None => writeln!(out, "usage: select <row> <col>")?,
            },
            "tele" => {
                let candidates = self.session.request_teleport();
                if candidates.is_empty() {
                    writeln!(out, "no teleport available for the selection")?;
                } else {
                    print_candidates(out, &candidates)?;
                }
            }
            "move" => match parse_square(&mut parts) {
                Some((row, col)) => self.commit(row, col, out)?,
                None => writeln!(out, "usage: move <row> <col>")?,
            },
            "buy" => {
                let key = parts.next().unwrap_or_default();
                match AbilityKind::from_key(key) {
                    Some(kind) => {
                        let target = self.session.selection.as_ref().map(|s| s.location);
                        match self.session.purchase_ability(kind) {
                            Ok(()) => {
                                if let Some(location) = target {
                                    let owner = self
                                        .session
                                        .board
                                        .view(location)
                                        .map(|piece| piece.color)
                                        .unwrap_or(Color::Light);
                                    self.transcript.record_purchase(owner, location, kind);
                                }
                                writeln!(out, "bought {kind}")?;
                                writeln!(out, "{}", render_status(&self.session))?;
                            }
                            Err(err) => writeln!(out, "rejected: {err}")?,
                        }
                    }
                    None => writeln!(out, "unknown ability '{key}' — see 'catalog'")?,
                }
            }
            "catalog" => {
                for listing in ABILITY_CATALOG {
                    writeln!(
                        out,
                        "{:<10} {:>2} pts  {}",
                        listing.kind.key(),
                        listing.cost,
                        listing.description
                    )?;
                }
            }
            "start" => {
                self.session.start_game();
                writeln!(out, "{}", render_status(&self.session))?;
            }
            "reset" => {
                self.session.reset();
                self.transcript = MatchTranscript::new();
                write!(out, "{}", render_board(&self.session.board))?;
                writeln!(out, "{}", render_status(&self.session))?;
            }
            "show" => {
                write!(out, "{}", render_board(&self.session.board))?;
                writeln!(out, "{}", render_status(&self.session))?;
            }
            "points" => writeln!(out, "{}", render_status(&self.session))?,
            "log" => {
                let result = match self.session.match_state.winner {
                    Some(winner) => winner.to_string(),
                    None => "*".to_owned(),
                };
                write!(out, "{}", self.transcript.write(&result))?;
            }
            "quit" | "exit" => return Ok(true),
            _ => writeln!(out, "unknown command '{cmd}' — type 'help'")?,
        }

        Ok(false)
    }

    fn commit(&mut self, row: i8, col: i8, out: &mut impl Write) -> io::Result<()> {
        let from = self.session.selection.as_ref().map(|s| s.location);
        let kind = self.session.selection.as_ref().and_then(|s| {
            s.candidates
                .iter()
                .find(|candidate| candidate.destination == (row, col))
                .map(|candidate| candidate.kind)
        });
        let mover = from
            .and_then(|location| self.session.board.view(location).map(|piece| piece.color));

        match self.session.commit_move(row, col) {
            Ok(committed) => {
                if let (Some(from), Some(kind), Some(mover)) = (from, kind, mover) {
                    self.transcript
                        .record_move(mover, from, (row, col), kind, &committed.outcome);
                }
                write!(out, "{}", render_board(&self.session.board))?;
                writeln!(out, "{}", render_status(&self.session))?;
                if committed.ended {
                    if let Some(winner) = committed.winner {
                        writeln!(out, "{} captured the enemy king", winner)?;
                    }
                    write!(out, "{}", self.transcript.write(
                        &committed
                            .winner
                            .map(|winner| winner.to_string())
                            .unwrap_or_else(|| "*".to_owned()),
                    ))?;
                }
            }
            Err(err) => writeln!(out, "rejected: {err}")?,
        }
        Ok(())
    }
}

fn parse_square<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Option<(i8, i8)> {
    let row = parts.next()?.parse::<i8>().ok()?;
    let col = parts.next()?.parse::<i8>().ok()?;
    Some((row, col))
}

fn print_candidates(out: &mut impl Write, candidates: &[CandidateMove]) -> io::Result<()> {
    if candidates.is_empty() {
        writeln!(out, "no moves for that square")?;
        return Ok(());
    }
    for candidate in candidates {
        writeln!(
            out,
            "  ({},{}) {:?}",
            candidate.destination.0, candidate.destination.1, candidate.kind
        )?;
    }
    Ok(())
}
