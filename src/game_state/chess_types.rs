//! Core value types shared by the board, the validator and the engines.
//!
//! Pieces are stored on the board as small integer codes (0 empty, 1..=6
//! white, 7..=12 black). Color is derived from the code range, so a cell never
//! carries a separate color field.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Board square index (`0..=63`, `row * 8 + col`).
pub type Square = u8;

/// Raw cell contents as persisted on the board.
pub type PieceCode = u8;

pub const EMPTY: PieceCode = 0;
pub const BOARD_SQUARES: usize = 64;

const BLACK_CODE_OFFSET: PieceCode = 6;

/// Side of the board. White is the human player, Black the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    let base = kind.index() as PieceCode + 1;
    match color {
        Color::White => base,
        Color::Black => base + BLACK_CODE_OFFSET,
    }
}

/// Decodes a cell value. Returns `None` for empty cells and for codes outside
/// the piece range.
#[inline]
pub const fn decode_piece(code: PieceCode) -> Option<(Color, PieceKind)> {
    let (color, offset) = match code {
        1..=6 => (Color::White, code - 1),
        7..=12 => (Color::Black, code - 1 - BLACK_CODE_OFFSET),
        _ => return None,
    };
    let kind = match offset {
        0 => PieceKind::Pawn,
        1 => PieceKind::Knight,
        2 => PieceKind::Bishop,
        3 => PieceKind::Rook,
        4 => PieceKind::Queen,
        _ => PieceKind::King,
    };
    Some((color, kind))
}

/// Converts an externally supplied position into a square, rejecting anything
/// off the board.
#[inline]
pub fn square_from_index(pos: u32) -> Option<Square> {
    if (pos as usize) < BOARD_SQUARES {
        Some(pos as Square)
    } else {
        None
    }
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % 8
}

/// Strength setting of the computer side. Wire values: 1 = easy, 2 = hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl TryFrom<u32> for Difficulty {
    type Error = GameError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Resigned,
    Finished,
}
