//! Core value types shared by every subsystem.
//!
//! Pieces are small `Copy` records so that copying a board never aliases the
//! live one. The fluctuator's movement mode is carried by its `PieceKind`
//! variant, so no other kind can hold a mode.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BOARD_SIZE;

/// Unit step between two squares, `(row, col)`.
pub type Direction = (i8, i8);

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Active sliding pattern of a fluctuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FluctuatorMode {
    #[default]
    Rook,
    Bishop,
}

impl FluctuatorMode {
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            FluctuatorMode::Rook => FluctuatorMode::Bishop,
            FluctuatorMode::Bishop => FluctuatorMode::Rook,
        }
    }

    #[inline]
    pub const fn directions(self) -> [Direction; 4] {
        match self {
            FluctuatorMode::Rook => ORTHOGONAL_DIRECTIONS,
            FluctuatorMode::Bishop => DIAGONAL_DIRECTIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Wormhole,
    BlackHole,
    WhiteHole,
    Fluctuator(FluctuatorMode),
    Supernova,
    Photon,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds that may slide onto an adjacent friendly wormhole to teleport.
    #[inline]
    pub const fn can_use_teleportation(self) -> bool {
        matches!(
            self,
            PieceKind::Queen
                | PieceKind::Wormhole
                | PieceKind::BlackHole
                | PieceKind::WhiteHole
                | PieceKind::Photon
                | PieceKind::Fluctuator(_)
        )
    }

    /// Kinds unaffected by black-hole pull and white-hole push.
    #[inline]
    pub const fn is_hole_immune(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::Queen)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Wormhole => "Wormhole",
            PieceKind::BlackHole => "BlackHole",
            PieceKind::WhiteHole => "WhiteHole",
            PieceKind::Fluctuator(_) => "Fluctuator",
            PieceKind::Supernova => "Supernova",
            PieceKind::Photon => "Photon",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            moved: false,
        }
    }

    #[inline]
    pub const fn moved(mut self) -> Self {
        self.moved = true;
        self
    }

    #[inline]
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color != color
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Flips a fluctuator's mode; other kinds are returned unchanged.
    #[inline]
    pub fn with_toggled_mode(mut self) -> Self {
        if let PieceKind::Fluctuator(mode) = self.kind {
            self.kind = PieceKind::Fluctuator(mode.flipped());
        }
        self
    }
}

/// Board coordinate. Row 0 is Black's back rank; row 11 is White's.
///
/// Values off the board are representable so callers can probe offsets;
/// `is_on_board` tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The square `steps` times `direction` away, if it is on the board.
    #[inline]
    pub fn offset(self, direction: Direction, steps: i8) -> Option<Square> {
        let row = self.row.checked_add(direction.0.checked_mul(steps)?)?;
        let col = self.col.checked_add(direction.1.checked_mul(steps)?)?;
        let target = Square::new(row, col);
        target.is_on_board().then_some(target)
    }

    #[inline]
    pub fn chebyshev_distance(self, other: Square) -> i8 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// True for the 8 neighbours, false for the square itself.
    #[inline]
    pub fn is_adjacent(self, other: Square) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Unit step from `self` toward `other`.
    #[inline]
    pub fn direction_to(self, other: Square) -> Direction {
        (
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }

    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_off_the_board_are_none() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset((-1, 0), 1), None);
        assert_eq!(corner.offset((1, 1), 2), Some(Square::new(2, 2)));
        assert_eq!(Square::new(11, 11).offset((0, 1), 1), None);
        assert_eq!(Square::new(i8::MAX, 0).offset((1, 0), 2), None);
    }

    #[test]
    fn adjacency_excludes_self_and_distance_two() {
        let centre = Square::new(5, 5);
        assert!(centre.is_adjacent(Square::new(4, 6)));
        assert!(!centre.is_adjacent(centre));
        assert!(!centre.is_adjacent(Square::new(3, 5)));
    }

    #[test]
    fn fluctuator_toggle_only_touches_fluctuators() {
        let flux = Piece::new(PieceKind::Fluctuator(FluctuatorMode::Rook), Color::White);
        assert_eq!(
            flux.with_toggled_mode().kind,
            PieceKind::Fluctuator(FluctuatorMode::Bishop)
        );

        let queen = Piece::new(PieceKind::Queen, Color::Black);
        assert_eq!(queen.with_toggled_mode(), queen);
    }

    #[test]
    fn teleport_capability_and_immunity_tables() {
        assert!(PieceKind::Photon.can_use_teleportation());
        assert!(!PieceKind::King.can_use_teleportation());
        assert!(!PieceKind::Pawn.can_use_teleportation());
        assert!(PieceKind::Queen.is_hole_immune());
        assert!(!PieceKind::Supernova.is_hole_immune());
    }
}
