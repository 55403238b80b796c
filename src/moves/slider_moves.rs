//! Shared ray walker for sliding pieces.
//!
//! Every ray obeys the same three stops:
//! - a square under an enemy white hole's influence ends the ray before it
//!   (queens see through white holes);
//! - a friendly wormhole adjacent to the slider's origin is a destination
//!   for teleport-capable pieces ("enter the wormhole") and ends the ray;
//! - any other occupant ends the ray, and is a destination if it is an enemy.

use crate::fields::hole_fields::in_white_hole_radius;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{
    Direction, Piece, PieceKind, Square, ALL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

/// Outcome of stepping a ray onto one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RayStep {
    Continue,
    StopIncluding,
    StopExcluding,
}

/// Classifies `target` for a ray cast by `piece` from `origin`.
pub(crate) fn ray_step(board: &Board, origin: Square, piece: Piece, target: Square) -> RayStep {
    if piece.kind != PieceKind::Queen && in_white_hole_radius(board, target, piece.color) {
        return RayStep::StopExcluding;
    }

    match board.get(target) {
        None => RayStep::Continue,
        Some(occupant)
            if occupant.is(PieceKind::Wormhole, piece.color)
                && piece.kind.can_use_teleportation()
                && origin.is_adjacent(target) =>
        {
            RayStep::StopIncluding
        }
        Some(occupant) if occupant.is_enemy_of(piece.color) => RayStep::StopIncluding,
        Some(_) => RayStep::StopExcluding,
    }
}

pub fn slide(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    max_steps: i8,
    out: &mut Vec<Square>,
) {
    for &direction in directions {
        for steps in 1..=max_steps {
            let Some(target) = from.offset(direction, steps) else {
                break;
            };
            match ray_step(board, from, piece, target) {
                RayStep::Continue => out.push(target),
                RayStep::StopIncluding => {
                    out.push(target);
                    break;
                }
                RayStep::StopExcluding => break,
            }
        }
    }
}

/// Black and white holes slide like rooks.
#[inline]
pub fn generate_hole_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    slide(board, from, piece, &ORTHOGONAL_DIRECTIONS, BOARD_SIZE, out);
}

#[inline]
pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    slide(board, from, piece, &ALL_DIRECTIONS, BOARD_SIZE, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn run(board: &Board, from: Square) -> Vec<Square> {
        let piece = board.get(from).expect("slider on square");
        let mut out = Vec::new();
        match piece.kind {
            PieceKind::Queen => generate_queen_moves(board, from, piece, &mut out),
            _ => generate_hole_moves(board, from, piece, &mut out),
        }
        out
    }

    #[test]
    fn queen_covers_open_board() {
        let mut board = Board::empty();
        board.set(Square::new(0, 0), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(run(&board, Square::new(0, 0)).len(), 33);
    }

    #[test]
    fn hole_slides_orthogonally_and_captures() {
        let mut board = Board::empty();
        let from = Square::new(6, 6);
        board.set(from, Some(Piece::new(PieceKind::BlackHole, Color::White)));
        board.set(Square::new(6, 9), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set(Square::new(3, 6), Some(Piece::new(PieceKind::Pawn, Color::White)));

        let moves = run(&board, from);
        assert!(moves.contains(&Square::new(6, 9)));
        assert!(!moves.contains(&Square::new(6, 10)));
        assert!(moves.contains(&Square::new(4, 6)));
        assert!(!moves.contains(&Square::new(3, 6)));
        assert!(!moves.contains(&Square::new(5, 5)));
        // down 5, up 2, left 6, right 3
        assert_eq!(moves.len(), 16);
    }

    #[test]
    fn enemy_white_hole_blocks_vision_except_for_queens() {
        let mut board = Board::empty();
        board.set(Square::new(2, 8), Some(Piece::new(PieceKind::WhiteHole, Color::Black)));
        board.set(Square::new(2, 2), Some(Piece::new(PieceKind::BlackHole, Color::White)));
        board.set(Square::new(4, 2), Some(Piece::new(PieceKind::Queen, Color::White)));

        let hole_moves = run(&board, Square::new(2, 2));
        assert!(hole_moves.contains(&Square::new(2, 6)));
        assert!(!hole_moves.contains(&Square::new(2, 7)));
        assert!(!hole_moves.contains(&Square::new(2, 8)));

        board.set(Square::new(2, 2), None);
        board.set(Square::new(2, 3), Some(Piece::new(PieceKind::Queen, Color::White)));
        let queen_moves = run(&board, Square::new(2, 3));
        assert!(queen_moves.contains(&Square::new(2, 7)));
        assert!(queen_moves.contains(&Square::new(2, 8)));
    }

    #[test]
    fn adjacent_friendly_wormhole_is_an_entry() {
        let mut board = Board::empty();
        board.set(Square::new(5, 5), Some(Piece::new(PieceKind::WhiteHole, Color::White)));
        board.set(Square::new(5, 6), Some(Piece::new(PieceKind::Wormhole, Color::White)));
        board.set(Square::new(2, 5), Some(Piece::new(PieceKind::Wormhole, Color::White)));

        let moves = run(&board, Square::new(5, 5));
        assert!(moves.contains(&Square::new(5, 6)));
        assert!(!moves.contains(&Square::new(5, 7)));
        assert!(moves.contains(&Square::new(3, 5)));
        assert!(!moves.contains(&Square::new(2, 5)));
    }
}
