//! Flat 64-cell board.
//!
//! `Board` owns a fixed array of piece codes. It is `Copy`, so validators and
//! engines always work on a snapshot and the stored record is only replaced
//! when a whole move has been committed.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PieceCode>", into = "Vec<PieceCode>")]
pub struct Board {
    cells: [PieceCode; BOARD_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [EMPTY; BOARD_SQUARES],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn starting_position() -> Self {
        Self {
            cells: STARTING_LAYOUT,
        }
    }

    #[inline]
    pub fn cells(&self) -> &[PieceCode; BOARD_SQUARES] {
        &self.cells
    }

    #[inline]
    pub fn code_at(&self, square: Square) -> PieceCode {
        self.cells[square as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        decode_piece(self.code_at(square))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.code_at(square) == EMPTY
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|(color, _)| color)
    }

    /// Places a piece (or clears the cell with `EMPTY`).
    #[inline]
    pub fn set(&mut self, square: Square, code: PieceCode) {
        self.cells[square as usize] = code;
    }

    /// Bitmask of every occupied square, bit `n` for square `n`.
    pub fn occupancy(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, code)| **code != EMPTY)
            .fold(0u64, |acc, (sq, _)| acc | (1u64 << sq))
    }

    /// Squares holding a piece of `color`, in ascending order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..BOARD_SQUARES as Square).filter(move |sq| self.color_at(*sq) == Some(color))
    }

    /// Moves whatever stands on `from` to `to`, overwriting the destination,
    /// and returns the code that was captured (`EMPTY` for a quiet move).
    /// Legality is the caller's concern.
    pub fn apply_move(&mut self, from: Square, to: Square) -> PieceCode {
        let moved = self.code_at(from);
        let captured = self.code_at(to);
        self.set(to, moved);
        self.set(from, EMPTY);
        captured
    }

    /// Copy of this board with the move applied.
    #[inline]
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        next.apply_move(from, to);
        next
    }
}

impl From<Board> for Vec<PieceCode> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl TryFrom<Vec<PieceCode>> for Board {
    type Error = String;

    fn try_from(cells: Vec<PieceCode>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [PieceCode; BOARD_SQUARES] = cells
            .try_into()
            .map_err(|_| format!("board must have {BOARD_SQUARES} cells, got {len}"))?;
        if let Some(bad) = cells.iter().find(|c| **c != EMPTY && decode_piece(**c).is_none()) {
            return Err(format!("invalid piece code {bad}"));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_expected_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.code_at(52), piece_code(Color::White, PieceKind::Pawn));
        assert_eq!(board.code_at(57), piece_code(Color::White, PieceKind::Knight));
        assert_eq!(board.code_at(4), piece_code(Color::Black, PieceKind::King));
        assert_eq!(board.squares_of(Color::White).count(), 16);
        assert_eq!(board.squares_of(Color::Black).count(), 16);
        assert_eq!(board.occupancy().count_ones(), 32);
    }

    #[test]
    fn apply_move_overwrites_capture_and_clears_source() {
        let mut board = Board::starting_position();
        let captured = board.apply_move(57, 8);
        assert_eq!(captured, piece_code(Color::Black, PieceKind::Pawn));
        assert_eq!(board.code_at(8), piece_code(Color::White, PieceKind::Knight));
        assert!(board.is_empty(57));
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = Board::starting_position();
        let next = board.with_move(52, 36);
        assert_eq!(board, Board::starting_position());
        assert!(next.is_empty(52));
    }

    #[test]
    fn json_round_trip_keeps_sixty_four_cells() {
        let board = Board::starting_position();
        let json = serde_json::to_string(&board).expect("board should encode");
        let decoded: Board = serde_json::from_str(&json).expect("board should decode");
        assert_eq!(decoded, board);
    }

    #[test]
    fn decoding_rejects_short_boards_and_bad_codes() {
        assert!(serde_json::from_str::<Board>("[1,2,3]").is_err());
        let mut cells = vec![0u8; 64];
        cells[10] = 42;
        let json = serde_json::to_string(&cells).expect("cells should encode");
        assert!(serde_json::from_str::<Board>(&json).is_err());
    }
}
