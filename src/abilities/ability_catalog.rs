//! Fixed catalog of purchasable abilities.
//!
//! The catalog is a compile-time table, not runtime configuration. Ability
//! identity is the closed `AbilityKind` enum, so an unknown ability cannot
//! exist inside the engine; the string form only appears at the text
//! front-end boundary via `AbilityKind::from_key`.

use std::fmt;

use crate::game_state::chess_types::Abilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityKind {
    /// Negates the next capture on the piece.
    Shield,
    /// Grants knight-style jumping moves.
    Jumper,
    /// Grants up to two-square orthogonal moves.
    Dash,
    /// Adds one teleport charge (range 3).
    Teleport,
}

impl AbilityKind {
    /// Parses the stable catalog key used by front-ends.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "shield" => Some(AbilityKind::Shield),
            "jumper" => Some(AbilityKind::Jumper),
            "dash" => Some(AbilityKind::Dash),
            "teleport" | "teleports" => Some(AbilityKind::Teleport),
            _ => None,
        }
    }

    #[inline]
    pub const fn key(self) -> &'static str {
        match self {
            AbilityKind::Shield => "shield",
            AbilityKind::Jumper => "jumper",
            AbilityKind::Dash => "dash",
            AbilityKind::Teleport => "teleports",
        }
    }

    /// Applies the purchase effect to a piece's ability block. Flag abilities
    /// are idempotent (buying Shield twice still just sets the flag — and
    /// upstream still charges for it, which is the rule set's choice);
    /// Teleport stacks one charge per purchase with no cap.
    pub fn apply(self, abilities: &mut Abilities) {
        match self {
            AbilityKind::Shield => abilities.shield = true,
            AbilityKind::Jumper => abilities.jumper = true,
            AbilityKind::Dash => abilities.dash = true,
            AbilityKind::Teleport => abilities.teleports = abilities.teleports.saturating_add(1),
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One purchasable catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct AbilityListing {
    pub kind: AbilityKind,
    pub display_name: &'static str,
    pub cost: i32,
    pub description: &'static str,
}

/// The full purchasable catalog, in display order.
pub const ABILITY_CATALOG: [AbilityListing; 4] = [
    AbilityListing {
        kind: AbilityKind::Shield,
        display_name: "Shield (1x)",
        cost: 5,
        description: "Negate the next capture on this piece.",
    },
    AbilityListing {
        kind: AbilityKind::Jumper,
        display_name: "Jumper",
        cost: 8,
        description: "Gain Knight-like jumping moves.",
    },
    AbilityListing {
        kind: AbilityKind::Dash,
        display_name: "Dash",
        cost: 6,
        description: "Gain up to 2-step orthogonal moves.",
    },
    AbilityListing {
        kind: AbilityKind::Teleport,
        display_name: "Teleport (+1)",
        cost: 7,
        description: "Adds one teleport charge (range 3).",
    },
];

/// Looks up the catalog entry for a kind.
pub const fn listing_for(kind: AbilityKind) -> &'static AbilityListing {
    match kind {
        AbilityKind::Shield => &ABILITY_CATALOG[0],
        AbilityKind::Jumper => &ABILITY_CATALOG[1],
        AbilityKind::Dash => &ABILITY_CATALOG[2],
        AbilityKind::Teleport => &ABILITY_CATALOG[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_costs_match_the_rule_set() {
        assert_eq!(listing_for(AbilityKind::Shield).cost, 5);
        assert_eq!(listing_for(AbilityKind::Jumper).cost, 8);
        assert_eq!(listing_for(AbilityKind::Dash).cost, 6);
        assert_eq!(listing_for(AbilityKind::Teleport).cost, 7);
    }

    #[test]
    fn keys_round_trip_and_reject_garbage() {
        for listing in ABILITY_CATALOG {
            assert_eq!(AbilityKind::from_key(listing.kind.key()), Some(listing.kind));
        }
        assert_eq!(AbilityKind::from_key("teleport"), Some(AbilityKind::Teleport));
        assert_eq!(AbilityKind::from_key("castle"), None);
        assert_eq!(AbilityKind::from_key(""), None);
    }

    #[test]
    fn flag_abilities_are_idempotent_and_teleport_stacks() {
        let mut abilities = Abilities::default();
        AbilityKind::Shield.apply(&mut abilities);
        AbilityKind::Shield.apply(&mut abilities);
        AbilityKind::Teleport.apply(&mut abilities);
        AbilityKind::Teleport.apply(&mut abilities);
        AbilityKind::Teleport.apply(&mut abilities);
        assert!(abilities.shield);
        assert_eq!(abilities.teleports, 3);
        assert!(!abilities.jumper);
    }
}
