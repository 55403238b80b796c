//! Photon rays.
//!
//! A photon travels diagonally and bounces off the board edge once per ray:
//! the component that would leave the board is inverted. A second edge ends
//! the ray. Enemy white holes always block a photon.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Piece, Square, DIAGONAL_DIRECTIONS};
use crate::moves::slider_moves::{ray_step, RayStep};

pub fn generate_photon_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    for (start_dr, start_dc) in DIAGONAL_DIRECTIONS {
        let (mut dr, mut dc) = (start_dr, start_dc);
        let mut current = from;
        let mut reflected = false;

        loop {
            let next = Square::new(current.row + dr, current.col + dc);
            if !next.is_on_board() {
                if reflected {
                    break;
                }
                if !(0..BOARD_SIZE).contains(&next.row) {
                    dr = -dr;
                }
                if !(0..BOARD_SIZE).contains(&next.col) {
                    dc = -dc;
                }
                reflected = true;
                continue;
            }

            current = next;
            match ray_step(board, from, piece, current) {
                RayStep::Continue => push_unique(out, current),
                RayStep::StopIncluding => {
                    push_unique(out, current);
                    break;
                }
                RayStep::StopExcluding => break,
            }
        }
    }
}

/// A ray bouncing out of a corner retraces its own path.
#[inline]
fn push_unique(out: &mut Vec<Square>, square: Square) {
    if !out.contains(&square) {
        out.push(square);
    }
}
