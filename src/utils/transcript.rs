//! Match transcript writer for game interchange and logs.
//!
//! Serializes the actions of one match to a bracketed-header text form in the
//! PGN spirit: a header block (Event, Site, Date, Result) followed by one
//! line per committed action. The variant has its own move vocabulary
//! (teleports, shield negations, purchases), so the movetext is a plain
//! action log rather than standard algebraic notation.

use std::collections::BTreeMap;

use chrono::Local;

use crate::abilities::ability_catalog::AbilityKind;
use crate::game_state::chess_types::{BoardLocation, Color};
use crate::move_generation::move_apply::MoveOutcome;
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Default)]
pub struct MatchTranscript {
    entries: Vec<String>,
}

impl MatchTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one committed move, including what it resolved to.
    pub fn record_move(
        &mut self,
        mover: Color,
        from: BoardLocation,
        to: BoardLocation,
        kind: MoveKind,
        outcome: &MoveOutcome,
    ) {
        let verb = match kind {
            MoveKind::Move => "moves",
            MoveKind::Capture if outcome.shield_consumed => "strikes shield at",
            MoveKind::Capture => "captures",
            MoveKind::Teleport => "teleports to",
        };
        let mut entry = format!(
            "{} {} ({},{}) -> ({},{})",
            mover, verb, from.0, from.1, to.0, to.1
        );
        if outcome.promoted {
            entry.push_str(" =Q");
        }
        if outcome.points_awarded > 0 {
            entry.push_str(&format!(" +{}", outcome.points_awarded));
        }
        self.entries.push(entry);
    }

    /// Records an ability purchase.
    pub fn record_purchase(&mut self, owner: Color, location: BoardLocation, kind: AbilityKind) {
        self.entries.push(format!(
            "{} buys {} for ({},{})",
            owner,
            kind,
            location.0,
            location.1
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the transcript with default headers. `result` is the outcome
    /// tag, e.g. `light` / `dark` / `*` for an unfinished match.
    pub fn write(&self, result: &str) -> String {
        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), "Arcane Chess Match".to_owned());
        headers.insert("Site".to_owned(), "Local".to_owned());
        headers.insert(
            "Date".to_owned(),
            Local::now().format("%Y.%m.%d").to_string(),
        );
        headers.insert("Result".to_owned(), result.to_owned());
        self.write_with_headers(&headers)
    }

    pub fn write_with_headers(&self, headers: &BTreeMap<String, String>) -> String {
        let mut out = String::new();
        for (key, value) in headers {
            out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
        }
        out.push('\n');
        for (index, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, entry));
        }
        out
    }
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
