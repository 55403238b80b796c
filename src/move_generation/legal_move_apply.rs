//! Move executors.
//!
//! The `board_after_*` functions are pure and are shared with the legality
//! filter, so a simulated move and an executed one can never disagree. The
//! `apply_*` functions mutate a `GameState` and assume their input was
//! already validated; they never panic on bad input and simply do nothing.

use crate::fields::explosion::explosion_footprint;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{promotion_row, PROMOTION_CHOICES};
use crate::game_state::chess_types::{Color, FluctuatorMode, Piece, PieceKind, Square};
use crate::game_state::game_state::{GameOverReason, GameState, GameStatus};
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_king_in_check};
use crate::move_generation::move_generator::TeleportRoute;
use crate::moves::pawn_moves::en_passant_victim;

/// Board after `from` moves to `to`, with en-passant removal, the moved flag
/// and the fluctuator mode flip applied.
pub fn board_after_step(board: &Board, from: Square, to: Square, en_passant: Option<Square>) -> Board {
    let mut next = *board;
    let Some(piece) = next.take(from) else {
        return next;
    };

    if piece.kind == PieceKind::Pawn && en_passant == Some(to) && board.is_empty(to) {
        next.set(en_passant_victim(to, piece.color), None);
    }

    next.set(to, Some(landed(piece)));
    next
}

pub fn board_after_teleport(board: &Board, route: &TeleportRoute) -> Board {
    let mut next = *board;
    if let Some(piece) = next.take(route.from) {
        next.set(route.exit, Some(landed(piece)));
    }
    next
}

#[inline]
fn landed(piece: Piece) -> Piece {
    piece.moved().with_toggled_mode()
}

pub fn apply_step(game_state: &mut GameState, from: Square, to: Square) {
    let Some(piece) = game_state.board.get(from) else {
        return;
    };

    game_state.board = board_after_step(&game_state.board, from, to, game_state.en_passant_square);
    game_state.en_passant_square = double_step_target(piece, from, to);
    finish_move(game_state, piece.color, to);
}

/// Teleporting never creates an en-passant target.
pub fn apply_teleport(game_state: &mut GameState, route: &TeleportRoute) {
    let Some(piece) = game_state.board.get(route.from) else {
        return;
    };

    game_state.board = board_after_teleport(&game_state.board, route);
    game_state.en_passant_square = None;
    finish_move(game_state, piece.color, route.exit);
}

/// Empties the whole footprint, the supernova included, and passes the turn.
/// Returns the destroyed pieces.
pub fn apply_explosion(game_state: &mut GameState, center: Square) -> Vec<(Square, Piece)> {
    let Some(supernova) = game_state.board.get(center) else {
        return Vec::new();
    };
    if supernova.kind != PieceKind::Supernova {
        return Vec::new();
    }

    let destroyed: Vec<_> = explosion_footprint(center)
        .into_iter()
        .filter_map(|square| game_state.board.take(square).map(|piece| (square, piece)))
        .collect();

    game_state.en_passant_square = None;
    advance_turn(game_state);

    let enemy_king_destroyed = destroyed
        .iter()
        .any(|(_, piece)| piece.is(PieceKind::King, supernova.color.opposite()));
    if enemy_king_destroyed {
        game_state.status = GameStatus::Over {
            winner: supernova.color,
            reason: GameOverReason::Supernova,
        };
    }

    destroyed
}

/// Replaces the pending pawn and passes the turn. Returns the kind placed.
pub fn apply_promotion(game_state: &mut GameState, requested: PieceKind) -> Option<PieceKind> {
    let square = game_state.pending_promotion?;
    let pawn = game_state.board.get(square)?;

    let kind = promotion_kind(requested);
    game_state.board.set(square, Some(Piece::new(kind, pawn.color).moved()));
    game_state.pending_promotion = None;
    advance_turn(game_state);
    Some(kind)
}

/// Kings and pawns are not offered and fall back to a queen. A promoted
/// fluctuator always starts in rook mode.
pub fn promotion_kind(requested: PieceKind) -> PieceKind {
    match requested {
        PieceKind::Fluctuator(_) => PieceKind::Fluctuator(FluctuatorMode::Rook),
        kind if PROMOTION_CHOICES.contains(&kind) => kind,
        _ => PieceKind::Queen,
    }
}

pub fn advance_turn(game_state: &mut GameState) {
    game_state.side_to_move = game_state.side_to_move.opposite();
    refresh_status(game_state);
}

#[inline]
pub fn refresh_status(game_state: &mut GameState) {
    game_state.status = evaluate_status(game_state);
}

/// Status for the side to move. A missing king ends the game; so does check
/// with no legal reply. No legal reply without check is not terminal.
pub fn evaluate_status(game_state: &GameState) -> GameStatus {
    let board = &game_state.board;
    let side = game_state.side_to_move;

    for color in [side, side.opposite()] {
        if board.find_king(color).is_none() {
            return GameStatus::Over {
                winner: color.opposite(),
                reason: GameOverReason::KingCaptured,
            };
        }
    }

    if !is_king_in_check(board, side) {
        return GameStatus::Active;
    }
    if has_any_legal_move(game_state, side) {
        GameStatus::Check
    } else {
        GameStatus::Over {
            winner: side.opposite(),
            reason: GameOverReason::Checkmate,
        }
    }
}

fn double_step_target(piece: Piece, from: Square, to: Square) -> Option<Square> {
    (piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2)
        .then(|| Square::new((from.row + to.row) / 2, from.col))
}

fn finish_move(game_state: &mut GameState, mover: Color, landing: Square) {
    if game_state.board.find_king(mover.opposite()).is_none() {
        game_state.status = GameStatus::Over {
            winner: mover,
            reason: GameOverReason::KingCaptured,
        };
        return;
    }

    let promotes = game_state
        .board
        .get(landing)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && landing.row == promotion_row(mover));
    if promotes {
        game_state.pending_promotion = Some(landing);
        return;
    }

    advance_turn(game_state);
}
