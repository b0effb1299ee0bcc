//! Material evaluation.
//!
//! Scores are centipawns. `BoardScorer` keeps evaluation pluggable so the hard
//! engine can be pointed at a different heuristic without touching selection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `side`.
    fn score(&self, board: &Board, side: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    pub fn material_balance_white_minus_black(board: &Board) -> i32 {
        board
            .cells()
            .iter()
            .filter_map(|code| decode_piece(*code))
            .map(|(color, kind)| match color {
                Color::White => Self::piece_value(kind),
                Color::Black => -Self::piece_value(kind),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, side: Color) -> i32 {
        let balance = Self::material_balance_white_minus_black(board);
        match side {
            Color::White => balance,
            Color::Black => -balance,
        }
    }
}
