//! Black-hole and white-hole influence.
//!
//! A hole influences the 8 squares around it. Influence is always judged
//! relative to a color: only enemy holes pull, push or block vision.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, ALL_DIRECTIONS};

/// On-board neighbours of `square`. Rendering aid only; legality uses the
/// predicates below.
pub fn hole_radius(square: Square) -> Vec<Square> {
    if !square.is_on_board() {
        return Vec::new();
    }
    ALL_DIRECTIONS
        .iter()
        .filter_map(|&direction| square.offset(direction, 1))
        .collect()
}

/// Every hole on the board with the squares it influences.
pub fn hole_influence(board: &Board) -> Vec<(Square, Piece, Vec<Square>)> {
    board
        .pieces()
        .filter(|(_, piece)| matches!(piece.kind, PieceKind::BlackHole | PieceKind::WhiteHole))
        .map(|(square, piece)| (square, piece, hole_radius(square)))
        .collect()
}

#[inline]
pub fn in_black_hole_radius(board: &Board, square: Square, color: Color) -> bool {
    next_to_enemy(board, square, color, PieceKind::BlackHole)
}

#[inline]
pub fn in_white_hole_radius(board: &Board, square: Square, color: Color) -> bool {
    next_to_enemy(board, square, color, PieceKind::WhiteHole)
}

fn next_to_enemy(board: &Board, square: Square, color: Color, kind: PieceKind) -> bool {
    board.pieces().any(|(hole_square, piece)| {
        piece.kind == kind && piece.is_enemy_of(color) && hole_square.is_adjacent(square)
    })
}

/// A non-immune piece inside an enemy black hole's pull may not step out of
/// it, except by capturing that hole or by landing inside another pulled
/// square.
pub fn would_leave_black_hole_radius(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    if piece.kind.is_hole_immune() || !in_black_hole_radius(board, from, piece.color) {
        return false;
    }

    let lands_on_enemy_hole = board
        .get(to)
        .is_some_and(|target| target.kind == PieceKind::BlackHole && target.is_enemy_of(piece.color));
    if lands_on_enemy_hole {
        return false;
    }

    !in_black_hole_radius(board, to, piece.color)
}

/// A non-immune piece may not land inside an enemy white hole's push unless
/// it captures that hole.
pub fn would_enter_white_hole_radius(board: &Board, to: Square, piece: Piece) -> bool {
    if piece.kind.is_hole_immune() || !in_white_hole_radius(board, to, piece.color) {
        return false;
    }

    !board
        .get(to)
        .is_some_and(|target| target.kind == PieceKind::WhiteHole && target.is_enemy_of(piece.color))
}
