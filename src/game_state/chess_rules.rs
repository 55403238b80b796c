//! Canonical variant-rule constants.
//!
//! Board dimensions, the starting back-rank template, pawn home and promotion
//! rows, and the set of piece kinds a pawn may promote into.

use crate::game_state::chess_types::{Color, FluctuatorMode, PieceKind};

/// Side length of the square board.
pub const BOARD_SIZE: i8 = 12;

/// Back rank used for both colors, indexed by column.
pub const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::BlackHole,
    PieceKind::Wormhole,
    PieceKind::Supernova,
    PieceKind::Fluctuator(STARTING_FLUCTUATOR_MODE),
    PieceKind::Photon,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Photon,
    PieceKind::Fluctuator(STARTING_FLUCTUATOR_MODE),
    PieceKind::Supernova,
    PieceKind::Wormhole,
    PieceKind::WhiteHole,
];

/// Fluctuators in the starting template begin in diagonal mode.
pub const STARTING_FLUCTUATOR_MODE: FluctuatorMode = FluctuatorMode::Bishop;

/// Kinds a pawn may become. Anything else falls back to a queen.
pub const PROMOTION_CHOICES: [PieceKind; 7] = [
    PieceKind::Queen,
    PieceKind::Wormhole,
    PieceKind::BlackHole,
    PieceKind::WhiteHole,
    PieceKind::Fluctuator(FluctuatorMode::Rook),
    PieceKind::Supernova,
    PieceKind::Photon,
];

#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::White => BOARD_SIZE - 1,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::White => BOARD_SIZE - 2,
        Color::Black => 1,
    }
}

/// Row a pawn of `color` must reach to promote.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    back_rank_row(color.opposite())
}

/// Row step of a pawn advancing for `color`.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
