//! One-step moves for kings and moved supernovas.

use crate::fields::explosion::in_enemy_explosion_footprint;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square, ALL_DIRECTIONS};

/// `avoid_explosions` prunes squares inside an enemy supernova's footprint;
/// only true kings pass `true`.
pub fn generate_king_moves(
    board: &Board,
    from: Square,
    color: Color,
    avoid_explosions: bool,
    out: &mut Vec<Square>,
) {
    for direction in ALL_DIRECTIONS {
        let Some(target) = from.offset(direction, 1) else {
            continue;
        };
        if avoid_explosions && in_enemy_explosion_footprint(board, target, color) {
            continue;
        }
        if board.get(target).map_or(true, |occupant| occupant.is_enemy_of(color)) {
            out.push(target);
        }
    }
}
