//! Outcomes and phases reported by `GameSession` commands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, Square};

/// Result of an accepted move or teleport. Rejections are `ChessError`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// The move is complete and the turn has passed.
    Applied,
    /// A pawn reached the far rank; the turn passes after `choose_promotion`.
    AppliedPendingPromotion,
}

/// What a click on a square did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionOutcome {
    Selected(Square),
    Deselected,
    Moved(MoveOutcome),
}

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnPhase {
    AwaitingSelection,
    PieceSelected(Square),
    AwaitingExplosionConfirm(Square),
    AwaitingPromotionChoice(Square),
    GameOver,
}

/// Summary of a confirmed explosion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionReport {
    pub center: Square,
    pub destroyed: Vec<(Square, Piece)>,
}
