//! Wormhole registry.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Squares holding a wormhole, optionally only those of `color`, row-major.
pub fn wormholes(board: &Board, color: Option<Color>) -> Vec<Square> {
    board
        .pieces()
        .filter(|(_, piece)| {
            piece.kind == PieceKind::Wormhole && color.map_or(true, |c| piece.color == c)
        })
        .map(|(square, _)| square)
        .collect()
}

/// True when `piece` moving to `target` means entering a friendly wormhole
/// rather than landing on the square.
#[inline]
pub fn is_teleport_entry(board: &Board, piece: Piece, target: Square) -> bool {
    piece.kind.can_use_teleportation()
        && board
            .get(target)
            .is_some_and(|occupant| occupant.is(PieceKind::Wormhole, piece.color))
}
