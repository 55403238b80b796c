//! Errors returned by the game session and diagram parser.
//!
//! Every `ChessError` means a command was refused. The session guarantees that
//! a refused command leaves the game exactly as it was, so callers can treat an
//! `Err` as the "rejected" outcome and report the message to the player.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("Square {square} is off the board")]
    OffBoard { square: Square },

    #[error("The game is over")]
    GameOver,

    #[error("An explosion is waiting for confirmation")]
    ExplosionPending,

    #[error("A promotion choice is pending at {square}")]
    PromotionPending { square: Square },

    #[error("No piece at {square}")]
    EmptySquare { square: Square },

    #[error("The piece at {square} does not belong to {side_to_move}")]
    NotSideToMove { square: Square, side_to_move: Color },

    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("No legal teleport from {from} through {entry} to {exit}")]
    IllegalTeleport { from: Square, entry: Square, exit: Square },

    /// The one status message the rules define for players.
    #[error("Cannot explode: no valid target or friendly King in range")]
    CannotExplode { square: Square },

    #[error("No explosion is pending")]
    NoPendingExplosion,

    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// A move onto a friendly wormhole must name its exit.
    #[error("Entering the wormhole at {entry} needs a chosen exit")]
    WormholeNeedsExit { entry: Square },

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

pub type ChessResult<T> = Result<T, ChessError>;

/// Errors from the 12-line text diagram parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("Expected 12 rows, found {found}")]
    RowCount { found: usize },

    #[error("Row {row} has {found} squares, expected 12")]
    RowLength { row: usize, found: usize },

    #[error("Unknown piece code {code:?} at row {row}, column {col}")]
    UnknownPiece { code: char, row: usize, col: usize },
}
