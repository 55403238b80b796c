use crate::fields::explosion::footprint_contains;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::raw_moves::generate_raw_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// A king is in check when an enemy raw move reaches it, or when it stands in
/// an enemy supernova's footprint whether or not that supernova could explode.
/// A side without a king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };

    let mut scratch = Vec::with_capacity(32);
    for (from, piece) in board.pieces_of(color.opposite()) {
        if piece.kind == PieceKind::Supernova && footprint_contains(from, king_sq) {
            return true;
        }
        scratch.clear();
        generate_raw_moves(board, from, piece, None, &mut scratch);
        if scratch.contains(&king_sq) {
            return true;
        }
    }

    false
}

/// Squares of enemy pieces currently giving check to `color`'s king.
pub fn checkers(board: &Board, color: Color) -> Vec<Square> {
    let Some(king_sq) = king_square(board, color) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    let mut scratch = Vec::with_capacity(32);
    for (from, piece) in board.pieces_of(color.opposite()) {
        scratch.clear();
        generate_raw_moves(board, from, piece, None, &mut scratch);
        let by_footprint = piece.kind == PieceKind::Supernova && footprint_contains(from, king_sq);
        if by_footprint || scratch.contains(&king_sq) {
            found.push(from);
        }
    }
    found
}

/// Whether any `color` piece has at least one legal move. Explosions are not
/// moves and do not count.
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves_from(game_state, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;
    use crate::utils::board_diagram::parse_board_diagram;

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::starting_position();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(has_any_legal_move(&GameState::new_game(), Color::White));
    }

    #[test]
    fn unexploded_supernova_footprint_is_check() {
        let mut board = Board::starting_position();
        board.set(Square::new(9, 6), Some(Piece::new(PieceKind::Supernova, Color::Black).moved()));
        assert!(is_king_in_check(&board, Color::White));
        assert_eq!(checkers(&board, Color::White), vec![Square::new(9, 6)]);
    }

    #[test]
    fn queen_line_check_and_block() {
        let board = parse_board_diagram(
            "
            ......k.....
            ............
            ............
            ............
            ............
            ............
            ............
            ............
            ............
            ............
            ............
            ......K...q.
            ",
        )
        .expect("diagram parses");
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));

        let mut blocked = board;
        blocked.set(Square::new(11, 8), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!is_king_in_check(&blocked, Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let mut board = Board::empty();
        board.set(Square::new(5, 5), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert!(!is_king_in_check(&board, Color::White));
    }
}
