//! Per-kind raw move dispatch.
//!
//! Raw moves respect bounds, blocking and capture-by-color, but ignore king
//! safety and hole pull/push. The match is exhaustive so a new kind cannot be
//! added without a generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::fluctuator_moves::generate_fluctuator_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::photon_moves::generate_photon_moves;
use crate::moves::slider_moves::{generate_hole_moves, generate_queen_moves};
use crate::moves::supernova_moves::generate_supernova_moves;

pub fn generate_raw_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_square: Option<Square>,
    out: &mut Vec<Square>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, en_passant_square, out),
        PieceKind::Wormhole => generate_knight_moves(board, from, piece.color, out),
        PieceKind::BlackHole | PieceKind::WhiteHole => generate_hole_moves(board, from, piece, out),
        PieceKind::Fluctuator(_) => generate_fluctuator_moves(board, from, piece, out),
        PieceKind::Supernova => generate_supernova_moves(board, from, piece, out),
        PieceKind::Photon => generate_photon_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(board, from, piece.color, true, out),
    }
}

/// Raw destinations of whatever stands on `from`; empty for an empty square.
pub fn raw_moves(board: &Board, from: Square, en_passant_square: Option<Square>) -> Vec<Square> {
    let mut out = Vec::with_capacity(32);
    if let Some(piece) = board.get(from) {
        generate_raw_moves(board, from, piece, en_passant_square, &mut out);
    }
    out
}
