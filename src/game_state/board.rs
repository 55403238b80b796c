//! Fixed 12x12 piece grid.
//!
//! Row-major with the origin at the top-left. `Board` is `Copy`, so scratch
//! boards used by legality simulation and history snapshots are plain value
//! copies of the live one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Both back ranks from the template and a full row of pawns in front.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as i8;
                board.set(
                    Square::new(back_rank_row(color), col),
                    Some(Piece::new(*kind, color)),
                );
                board.set(
                    Square::new(pawn_home_row(color), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Piece on `square`; `None` when empty or off the board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        let (row, col) = square.index();
        self.squares[row][col]
    }

    /// Writes `piece` to `square`. Writes off the board are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if !square.is_on_board() {
            return;
        }
        let (row, col) = square.index();
        self.squares[row][col] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square);
        self.set(square, None);
        piece
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(square, _)| square)
    }

    pub fn all_squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}
