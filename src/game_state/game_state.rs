//! Snapshot-able game state.
//!
//! `GameState` holds everything that decides which moves are legal: the board,
//! the side to move, the one-turn en-passant target, a pawn awaiting its
//! promotion choice, and the derived check/terminal status. It is `Copy`, so
//! history stacks and legality simulation store plain values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOverReason {
    Checkmate,
    /// The winner's supernova destroyed the enemy king.
    Supernova,
    /// The loser's king left the board some other way (e.g. a teleport capture).
    KingCaptured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Active,
    /// The side to move is in check but has a way out.
    Check,
    Over {
        winner: Color,
        reason: GameOverReason,
    },
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant_square: Option<Square>,
    /// Pawn that reached the far rank; the turn does not pass until it is replaced.
    pub pending_promotion: Option<Square>,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Arbitrary position with no en-passant target, no pending promotion and
    /// an `Active` status. Callers that need a derived status should run it
    /// through `legal_move_apply::refresh_status`.
    #[inline]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            en_passant_square: None,
            pending_promotion: None,
            status: GameStatus::Active,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Over { winner, .. } => Some(winner),
            _ => None,
        }
    }
}
