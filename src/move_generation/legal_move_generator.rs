//! Legal move enumeration for one side.
//!
//! Sweeps every occupied origin of the side against all 64 destinations and
//! keeps what the validator accepts. Output is ordered by origin then
//! destination, so engines that break ties by index stay reproducible.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_validator::is_legal_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub moved: PieceKind,
    pub captured: Option<PieceKind>,
}

impl CandidateMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

pub fn generate_legal_moves(board: &Board, side: Color) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(64);

    for from in board.squares_of(side) {
        let Some((_, moved)) = board.piece_at(from) else {
            continue;
        };
        for to in 0..BOARD_SQUARES as Square {
            if !is_legal_square(board, from, to, side) {
                continue;
            }
            let captured = board.piece_at(to).map(|(_, kind)| kind);
            out.push(CandidateMove {
                from,
                to,
                moved,
                captured,
            });
        }
    }

    out
}

/// Cheaper than generating the full list when only existence matters.
pub fn has_legal_move(board: &Board, side: Color) -> bool {
    board.squares_of(side).any(|from| {
        (0..BOARD_SQUARES as Square).any(|to| is_legal_square(board, from, to, side))
    })
}
