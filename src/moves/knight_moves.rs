use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Direction, Square};

pub const KNIGHT_JUMPS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// L-shaped leaps for wormholes and unmoved supernovas. Never lands on a
/// friendly piece, so a leaper cannot enter a wormhole.
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for jump in KNIGHT_JUMPS {
        let Some(target) = from.offset(jump, 1) else {
            continue;
        };
        if board.get(target).map_or(true, |occupant| occupant.is_enemy_of(color)) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn open_board_has_eight_leaps() {
        let mut out = Vec::new();
        generate_knight_moves(&Board::empty(), Square::new(6, 6), Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn corner_and_friendly_blockers() {
        let mut board = Board::empty();
        board.set(Square::new(2, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(1, 2), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut out = Vec::new();
        generate_knight_moves(&board, Square::new(0, 0), Color::White, &mut out);
        assert_eq!(out, vec![Square::new(1, 2)]);
    }
}
