//! Crate root module declarations for the Nebula Chess rules engine.
//!
//! Exposes the 12x12 game model, the field queries for holes, wormholes and
//! supernovas, per-piece raw move generators, the legality filter and move
//! executors, and the `GameSession` command surface that user interfaces
//! drive.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod history;
}

pub mod fields {
    pub mod explosion;
    pub mod hole_fields;
    pub mod wormholes;
}

pub mod moves {
    pub mod fluctuator_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod photon_moves;
    pub mod raw_moves;
    pub mod slider_moves;
    pub mod supernova_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod teleport;
}

pub mod session {
    pub mod commands;
    pub mod game_session;
}

pub mod utils {
    pub mod board_diagram;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult, DiagramError};
pub use game_state::chess_types::{Color, FluctuatorMode, Piece, PieceKind, Square};
pub use game_state::game_state::{GameOverReason, GameState, GameStatus};
pub use move_generation::move_generator::{LegalMove, TeleportRoute};
pub use session::commands::{ExplosionReport, MoveOutcome, SelectionOutcome, TurnPhase};
pub use session::game_session::GameSession;
