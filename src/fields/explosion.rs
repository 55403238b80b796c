//! Supernova explosion footprint.
//!
//! The footprint is a star: the supernova's own square plus the squares one
//! and two steps away along each of the 8 orthogonal and diagonal lines. It
//! is used three ways: the squares an explosion empties, the standing check a
//! supernova gives an enemy king, and the squares an enemy king may not step
//! onto.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square, ALL_DIRECTIONS};

pub const EXPLOSION_REACH: i8 = 2;

pub fn explosion_footprint(center: Square) -> Vec<Square> {
    if !center.is_on_board() {
        return Vec::new();
    }
    let mut footprint = Vec::with_capacity(17);
    footprint.push(center);
    for direction in ALL_DIRECTIONS {
        for steps in 1..=EXPLOSION_REACH {
            if let Some(square) = center.offset(direction, steps) {
                footprint.push(square);
            }
        }
    }
    footprint
}

/// Membership test without allocating the footprint.
#[inline]
pub fn footprint_contains(center: Square, square: Square) -> bool {
    let dr = (square.row - center.row).abs();
    let dc = (square.col - center.col).abs();
    square.is_on_board()
        && dr <= EXPLOSION_REACH
        && dc <= EXPLOSION_REACH
        && (dr == 0 || dc == 0 || dr == dc)
}

/// True if any supernova hostile to `color` has `square` in its footprint.
pub fn in_enemy_explosion_footprint(board: &Board, square: Square, color: Color) -> bool {
    board.pieces().any(|(center, piece)| {
        piece.kind == PieceKind::Supernova
            && piece.is_enemy_of(color)
            && footprint_contains(center, square)
    })
}

/// A supernova may explode when its footprint holds at least one enemy piece
/// and no king of its own color.
pub fn explosion_is_valid(board: &Board, center: Square) -> bool {
    let Some(supernova) = board.get(center) else {
        return false;
    };
    if supernova.kind != PieceKind::Supernova {
        return false;
    }

    let caught: Vec<_> = explosion_footprint(center)
        .into_iter()
        .filter_map(|square| board.get(square))
        .collect();

    let hits_enemy = caught.iter().any(|piece| piece.is_enemy_of(supernova.color));
    let hits_own_king = caught
        .iter()
        .any(|piece| piece.is(PieceKind::King, supernova.color));

    hits_enemy && !hits_own_king
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn interior_footprint_has_seventeen_squares() {
        let footprint = explosion_footprint(Square::new(6, 6));
        assert_eq!(footprint.len(), 17);

        let mut unique = footprint.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 17);
        assert!(footprint.contains(&Square::new(6, 6)));
        assert!(footprint.contains(&Square::new(4, 4)));
        assert!(footprint.contains(&Square::new(6, 8)));
        assert!(!footprint.contains(&Square::new(5, 4)));
    }

    #[test]
    fn corner_footprint_is_clipped() {
        let footprint = explosion_footprint(Square::new(0, 0));
        assert_eq!(footprint.len(), 7);
        assert!(footprint.iter().all(|square| square.is_on_board()));
    }

    #[test]
    fn off_board_center_has_no_footprint() {
        assert!(explosion_footprint(Square::new(127, 0)).is_empty());
        assert!(explosion_footprint(Square::new(-1, 5)).is_empty());
    }

    #[test]
    fn contains_agrees_with_footprint() {
        let center = Square::new(1, 10);
        let footprint = explosion_footprint(center);
        for square in Board::all_squares() {
            assert_eq!(
                footprint_contains(center, square),
                footprint.contains(&square),
                "disagreement at {square}"
            );
        }
    }

    #[test]
    fn explosion_needs_an_enemy_and_no_friendly_king() {
        let mut board = Board::empty();
        let center = Square::new(5, 5);
        board.set(center, Some(Piece::new(PieceKind::Supernova, Color::White)));
        assert!(!explosion_is_valid(&board, center));

        board.set(Square::new(3, 5), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(explosion_is_valid(&board, center));

        board.set(Square::new(6, 6), Some(Piece::new(PieceKind::King, Color::White)));
        assert!(!explosion_is_valid(&board, center));
    }

    #[test]
    fn standing_threat_only_from_enemy_supernovas() {
        let mut board = Board::empty();
        board.set(Square::new(9, 6), Some(Piece::new(PieceKind::Supernova, Color::Black)));
        assert!(in_enemy_explosion_footprint(&board, Square::new(11, 6), Color::White));
        assert!(!in_enemy_explosion_footprint(&board, Square::new(11, 6), Color::Black));
        assert!(!in_enemy_explosion_footprint(&board, Square::new(11, 7), Color::White));
    }
}
