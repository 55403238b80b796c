//! Legality filter.
//!
//! Turns raw moves into legal moves. Each candidate is played on a scratch
//! copy of the board and dropped if it leaves the mover's king in check.
//! Wormhole entries are resolved into one candidate per exit; ordinary moves
//! of non-immune pieces must also respect black-hole pull and white-hole push.

use crate::fields::hole_fields::{would_enter_white_hole_radius, would_leave_black_hole_radius};
use crate::fields::wormholes::is_teleport_entry;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{board_after_step, board_after_teleport};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::LegalMove;
use crate::move_generation::teleport::teleport_exits;
use crate::moves::raw_moves::generate_raw_moves;

/// Legal moves of the piece on `from`, whichever color it is.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<LegalMove> {
    let board = &game_state.board;
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut raw = Vec::with_capacity(32);
    generate_raw_moves(board, from, piece, game_state.en_passant_square, &mut raw);

    let mut legal = Vec::with_capacity(raw.len());
    for to in raw {
        if is_teleport_entry(board, piece, to) {
            for route in teleport_exits(board, from, to, piece) {
                let next = board_after_teleport(board, &route);
                if !is_king_in_check(&next, piece.color) {
                    legal.push(LegalMove::Teleport(route));
                }
            }
            continue;
        }

        if would_leave_black_hole_radius(board, from, to, piece)
            || would_enter_white_hole_radius(board, to, piece)
        {
            continue;
        }

        let next = board_after_step(board, from, to, game_state.en_passant_square);
        if !is_king_in_check(&next, piece.color) {
            legal.push(LegalMove::Step { from, to });
        }
    }

    legal
}

/// Every legal move for the side to move.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<LegalMove> {
    game_state
        .board
        .pieces_of(game_state.side_to_move)
        .flat_map(|(from, _)| legal_moves_from(game_state, from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::utils::board_diagram::parse_board_diagram;

    fn state(diagram: &str, side: Color) -> GameState {
        GameState::from_board(parse_board_diagram(diagram).expect("diagram parses"), side)
    }

    fn landings(game: &GameState, from: Square) -> Vec<Square> {
        let mut out: Vec<_> = legal_moves_from(game, from)
            .iter()
            .map(LegalMove::landing)
            .collect();
        out.sort();
        out
    }

    #[test]
    fn starting_position_has_32_moves_each_side() {
        let game = GameState::new_game();
        assert_eq!(generate_legal_moves(&game).len(), 32);

        let black = GameState::from_board(Board::starting_position(), Color::Black);
        assert_eq!(generate_legal_moves(&black).len(), 32);
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        let game = state(
            "
            ......k.....
            ............
            ............
            ............
            ............
            ......q.....
            ............
            ............
            ............
            ............
            ......L.....
            ......K.....
            ",
            Color::White,
        );
        // a photon only moves diagonally, so every photon move opens the file
        assert!(legal_moves_from(&game, Square::new(10, 6)).is_empty());
        assert!(!legal_moves_from(&game, Square::new(11, 6)).is_empty());
    }

    #[test]
    fn black_hole_pull_holds_a_caught_piece() {
        let game = state(
            "
            ......k.....
            ............
            ............
            ............
            ...b........
            ....X.......
            ............
            ............
            ............
            ............
            ............
            ......K.....
            ",
            Color::White,
        );
        // every square the fluctuator reaches is outside the pull, except the hole itself
        assert_eq!(landings(&game, Square::new(5, 4)), vec![Square::new(4, 3)]);

        let mut freed = game;
        freed.board.set(Square::new(4, 3), None);
        assert_eq!(landings(&freed, Square::new(5, 4)).len(), 8);
    }

    #[test]
    fn white_hole_push_keeps_leapers_out() {
        let game = state(
            "
            ......k.....
            ............
            ............
            ............
            ............
            ............
            ....S.......
            ............
            .......h....
            ............
            ............
            ......K.....
            ",
            Color::White,
        );
        let moves = landings(&game, Square::new(6, 4));
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Square::new(7, 6)));
        assert!(moves.contains(&Square::new(8, 5)));
    }

    #[test]
    fn kings_and_queens_ignore_holes() {
        let game = state(
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
            ....b.......
            .....K......
            ",
            Color::White,
        );
        let moves = landings(&game, Square::new(11, 5));
        assert!(moves.contains(&Square::new(11, 6)));
        assert!(moves.contains(&Square::new(10, 6)));
        assert!(moves.contains(&Square::new(10, 4)));
    }

    #[test]
    fn teleport_exits_are_listed_per_exit() {
        let game = state(
            "
            ......k.....
            ............
            ............
            ..QW.....W..
            ............
            ............
            ............
            ............
            ............
            ............
            ............
            ......K.....
            ",
            Color::White,
        );
        let teleports: Vec<_> = legal_moves_from(&game, Square::new(3, 2))
            .into_iter()
            .filter(LegalMove::is_teleport)
            .collect();
        assert_eq!(teleports.len(), 1);
        assert_eq!(teleports[0].destination(), Square::new(3, 3));
        assert_eq!(teleports[0].landing(), Square::new(3, 10));
    }

    #[test]
    fn each_safe_exit_is_its_own_teleport() {
        let game = state(
            "
            ......k.....
            ............
            ............
            ..QW.....W..
            ............
            ............
            .........W..
            ............
            ............
            ............
            ............
            ......K.....
            ",
            Color::White,
        );
        let mut teleports: Vec<_> = legal_moves_from(&game, Square::new(3, 2))
            .into_iter()
            .filter(LegalMove::is_teleport)
            .map(|mv| (mv.destination(), mv.landing()))
            .collect();
        teleports.sort();
        assert_eq!(
            teleports,
            vec![
                (Square::new(3, 3), Square::new(3, 10)),
                (Square::new(3, 3), Square::new(6, 10)),
            ]
        );
    }

    #[test]
    fn teleport_that_exposes_the_king_is_dropped() {
        let game = state(
            "
            ..q...k.....
            ............
            ............
            ..QW.....W..
            ............
            ............
            ............
            ..K.........
            ............
            ............
            ............
            ............
            ",
            Color::White,
        );
        let moves = legal_moves_from(&game, Square::new(3, 2));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.landing().col == 2));
        assert!(!moves.iter().any(LegalMove::is_teleport));
    }
}
