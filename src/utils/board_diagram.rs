//! Plain-text board diagrams.
//!
//! A diagram is 12 lines of 12 characters, row 0 first. `.` is an empty
//! square; uppercase letters are White pieces and lowercase letters Black:
//!
//! | code | piece                     |
//! |------|---------------------------|
//! | `P`  | Pawn                      |
//! | `W`  | Wormhole                  |
//! | `B`  | BlackHole                 |
//! | `H`  | WhiteHole                 |
//! | `F`  | Fluctuator in rook mode   |
//! | `X`  | Fluctuator in bishop mode |
//! | `S`  | Supernova                 |
//! | `L`  | Photon                    |
//! | `Q`  | Queen                     |
//! | `K`  | King                      |
//!
//! Surrounding whitespace on each line and blank lines are ignored, so
//! diagrams can be written as indented raw strings. Parsed pieces are
//! unmoved. This is a diagnostic format, not a move notation.

use crate::chess_errors::DiagramError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, FluctuatorMode, Piece, PieceKind, Square};

const SIZE: usize = BOARD_SIZE as usize;

pub fn parse_board_diagram(diagram: &str) -> Result<Board, DiagramError> {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != SIZE {
        return Err(DiagramError::RowCount { found: rows.len() });
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != SIZE {
            return Err(DiagramError::RowLength { row, found });
        }

        for (col, code) in line.chars().enumerate() {
            if code == '.' {
                continue;
            }
            let piece = piece_from_code(code).ok_or(DiagramError::UnknownPiece { code, row, col })?;
            board.set(Square::new(row as i8, col as i8), Some(piece));
        }
    }

    Ok(board)
}

/// Inverse of `parse_board_diagram`, without indentation. The moved flag is
/// not represented.
pub fn board_to_diagram(board: &Board) -> String {
    let mut out = String::with_capacity(SIZE * (SIZE + 1));
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push(board.get(Square::new(row, col)).map_or('.', piece_code));
        }
        out.push('\n');
    }
    out
}

pub fn piece_from_code(code: char) -> Option<Piece> {
    let color = if code.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match code.to_ascii_uppercase() {
        'P' => PieceKind::Pawn,
        'W' => PieceKind::Wormhole,
        'B' => PieceKind::BlackHole,
        'H' => PieceKind::WhiteHole,
        'F' => PieceKind::Fluctuator(FluctuatorMode::Rook),
        'X' => PieceKind::Fluctuator(FluctuatorMode::Bishop),
        'S' => PieceKind::Supernova,
        'L' => PieceKind::Photon,
        'Q' => PieceKind::Queen,
        'K' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

pub fn piece_code(piece: Piece) -> char {
    let code = match piece.kind {
        PieceKind::Pawn => 'P',
        PieceKind::Wormhole => 'W',
        PieceKind::BlackHole => 'B',
        PieceKind::WhiteHole => 'H',
        PieceKind::Fluctuator(FluctuatorMode::Rook) => 'F',
        PieceKind::Fluctuator(FluctuatorMode::Bishop) => 'X',
        PieceKind::Supernova => 'S',
        PieceKind::Photon => 'L',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    };
    match piece.color {
        Color::White => code,
        Color::Black => code.to_ascii_lowercase(),
    }
}
