use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;

/// Leaps like a knight until its first move, then steps like a king. A
/// supernova never avoids enemy explosion footprints.
pub fn generate_supernova_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    if piece.moved {
        generate_king_moves(board, from, piece.color, false, out);
    } else {
        generate_knight_moves(board, from, piece.color, out);
    }
}
