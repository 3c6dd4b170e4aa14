//! Core piece and board representation.
//!
//! The board is a plain 8x8 mailbox of optional pieces. A bitboard layout was
//! considered and rejected: every piece carries mutable ability state (shield
//! flag, teleport charges, ...) that has to live with the piece itself, so a
//! mailbox of full `Piece` records is the natural model here.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind (color is stored separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Stable piece identity, assigned once at board setup and kept for the
/// piece's whole lifetime (promotion keeps the id, only the kind changes).
///
/// Displays in the `w7` / `b12` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub color: Color,
    pub serial: u8,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.color {
            Color::Light => 'w',
            Color::Dark => 'b',
        };
        write!(f, "{}{}", prefix, self.serial)
    }
}

/// Purchased ability state carried by each piece.
///
/// `shield`, `jumper`, and `dash` are persistent flags; `teleports` is a
/// consumable charge counter decremented once per use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abilities {
    pub shield: bool,
    pub jumper: bool,
    pub dash: bool,
    pub teleports: u8,
}

/// One piece on the board.
///
/// `has_moved` exists only to gate the pawn double-step; it is still set on
/// every kind of move (including teleports) to keep the rule simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub abilities: Abilities,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, serial: u8) -> Self {
        Piece {
            id: PieceId { color, serial },
            kind,
            color,
            abilities: Abilities::default(),
            has_moved: false,
        }
    }
}

/// Board coordinate as `(row, col)`.
///
/// Row 0 is Dark's back rank, row 7 is Light's; columns run 0..=7 left to
/// right from Light's perspective. Signed so that offset arithmetic can go
/// out of bounds and be rejected afterwards.
pub type BoardLocation = (i8, i8);

pub const BOARD_SIZE: i8 = 8;

#[inline]
pub const fn in_bounds(location: BoardLocation) -> bool {
    location.0 >= 0 && location.0 < BOARD_SIZE && location.1 >= 0 && location.1 < BOARD_SIZE
}

/// 8x8 mailbox of optional pieces.
///
/// `Clone` produces a fully independent deep copy (pieces are `Copy` value
/// types), which is what the resolver relies on to build post-move snapshots
/// without aliasing the previous board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Immutable access to a square. Panics on out-of-bounds input; all
    /// callers bounds-check coordinates before indexing.
    pub fn view(&self, location: BoardLocation) -> &Option<Piece> {
        &self.squares[location.0 as usize][location.1 as usize]
    }

    /// Mutable access to a square.
    pub fn at(&mut self, location: BoardLocation) -> &mut Option<Piece> {
        &mut self.squares[location.0 as usize][location.1 as usize]
    }

    /// Iterates every occupied square as `(location, piece)`.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (BoardLocation, &Piece)> {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.as_ref().map(|piece| ((row as i8, col as i8), piece))
            })
        })
    }

    /// Locates the king of the given color, if it is still on the board.
    pub fn find_king(&self, color: Color) -> Option<BoardLocation> {
        self.iter_pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(location, _)| location)
    }
}
