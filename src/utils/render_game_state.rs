//! Terminal-oriented board renderer.
//!
//! Draws the diagram codes of `board_diagram` with row and column labels
//! plus a status line, for debugging and log output.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::utils::board_diagram::piece_code;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    let header: String = (0..BOARD_SIZE).map(column_label).collect::<Vec<_>>().join(" ");

    out.push_str("   ");
    out.push_str(&header);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{row:>2} "));
        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let cell = match game_state.board.get(square) {
                Some(piece) => piece_code(piece),
                None if game_state.en_passant_square == Some(square) => '*',
                None => '·',
            };
            out.push(cell);
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&status_line(game_state));
    out
}

fn column_label(col: i8) -> String {
    // single character per column keeps the grid aligned
    char::from_digit(col as u32, BOARD_SIZE as u32)
        .unwrap_or('?')
        .to_string()
}

fn status_line(game_state: &GameState) -> String {
    let mut line = match game_state.status {
        GameStatus::Active => format!("{} to move", game_state.side_to_move),
        GameStatus::Check => format!("{} to move, in check", game_state.side_to_move),
        GameStatus::Over { winner, reason } => format!("{winner} wins ({reason:?})"),
    };
    if let Some(square) = game_state.pending_promotion {
        line.push_str(&format!(", promotion pending at {square}"));
    }
    line
}
