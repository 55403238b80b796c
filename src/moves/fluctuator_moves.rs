use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::slider_moves::slide;

pub const FLUCTUATOR_RANGE: i8 = 2;

/// Range-2 slides along the four lines of the fluctuator's current mode.
pub fn generate_fluctuator_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let mode = match piece.kind {
        PieceKind::Fluctuator(mode) => mode,
        _ => return,
    };
    slide(board, from, piece, &mode.directions(), FLUCTUATOR_RANGE, out);
}
