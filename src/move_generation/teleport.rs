//! Wormhole teleport resolution.
//!
//! A piece adjacent to a friendly wormhole enters it and leaves through any
//! other wormhole of its color, keeping its heading: the exit is the other
//! wormhole offset by the unit step from the piece to the entry.

use crate::fields::hole_fields::in_white_hole_radius;
use crate::fields::wormholes::wormholes;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::move_generation::move_generator::TeleportRoute;

pub fn teleport_exits(board: &Board, from: Square, entry: Square, piece: Piece) -> Vec<TeleportRoute> {
    if !from.is_adjacent(entry) {
        return Vec::new();
    }
    let entry_is_friendly_wormhole = board
        .get(entry)
        .is_some_and(|occupant| occupant.is(PieceKind::Wormhole, piece.color));
    if !entry_is_friendly_wormhole {
        return Vec::new();
    }

    let network = wormholes(board, Some(piece.color));
    if network.len() < 2 {
        return Vec::new();
    }

    let direction = from.direction_to(entry);
    network
        .into_iter()
        .filter(|&exit_wormhole| exit_wormhole != entry)
        .filter_map(|exit_wormhole| {
            let exit = exit_wormhole.offset(direction, 1)?;
            if board.get(exit).is_some_and(|occupant| occupant.color == piece.color) {
                return None;
            }
            if piece.kind != PieceKind::Queen && in_white_hole_radius(board, exit, piece.color) {
                return None;
            }
            Some(TeleportRoute {
                from,
                entry,
                exit_wormhole,
                exit,
                direction,
            })
        })
        .collect()
}
