//! Pawn pushes, diagonal captures and en passant.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_home_row};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_square: Option<Square>,
    out: &mut Vec<Square>,
) {
    let color = piece.color;
    let forward = pawn_direction(color);

    if let Some(one_step) = from.offset((forward, 0), 1) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if !piece.moved && from.row == pawn_home_row(color) {
                if let Some(two_step) = from.offset((forward, 0), 2) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for side in [-1i8, 1i8] {
        let Some(target) = from.offset((forward, side), 1) else {
            continue;
        };

        match board.get(target) {
            Some(occupant) if occupant.is_enemy_of(color) => out.push(target),
            None if en_passant_square == Some(target)
                && can_capture_en_passant(board, target, color) =>
            {
                out.push(target)
            }
            _ => {}
        }
    }
}

/// Square of the pawn removed when a `color` pawn captures onto `target`
/// en passant.
#[inline]
pub fn en_passant_victim(target: Square, color: Color) -> Square {
    Square::new(target.row - pawn_direction(color), target.col)
}

#[inline]
fn can_capture_en_passant(board: &Board, target: Square, color: Color) -> bool {
    board
        .get(en_passant_victim(target, color))
        .is_some_and(|victim| victim.is(PieceKind::Pawn, color.opposite()))
}
