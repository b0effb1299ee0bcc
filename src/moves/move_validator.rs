//! Move legality over a board snapshot.
//!
//! `is_legal` is pure: it never mutates the board and never fails, it only
//! answers yes or no. Generic rejections run first in a fixed order (same
//! square, off board, empty source, wrong color, own piece on target), then the
//! piece kind picks the geometric rule. Leaving one's own king attacked is not
//! considered.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{square_from_index, Color, PieceKind, Square};
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::king_moves::king_move_is_legal;
use crate::moves::knight_moves::knight_move_is_legal;
use crate::moves::pawn_moves::pawn_move_is_legal;
use crate::moves::queen_moves::queen_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

/// Checks a move given as raw external positions.
pub fn is_legal(board: &Board, from: u32, to: u32, mover: Color) -> bool {
    if from == to {
        return false;
    }
    let (Some(from), Some(to)) = (square_from_index(from), square_from_index(to)) else {
        return false;
    };
    is_legal_square(board, from, to, mover)
}

/// Same as [`is_legal`] for squares already known to be on the board.
pub fn is_legal_square(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    if from == to {
        return false;
    }
    let Some((color, kind)) = board.piece_at(from) else {
        return false;
    };
    if color != mover {
        return false;
    }
    if board.color_at(to) == Some(mover) {
        return false;
    }
    piece_rule_allows(board, kind, from, to, mover)
}

fn piece_rule_allows(board: &Board, kind: PieceKind, from: Square, to: Square, mover: Color) -> bool {
    match kind {
        PieceKind::Pawn => pawn_move_is_legal(board, from, to, mover),
        PieceKind::Knight => knight_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(board.occupancy(), from, to),
        PieceKind::Rook => rook_move_is_legal(board.occupancy(), from, to),
        PieceKind::Queen => queen_move_is_legal(board.occupancy(), from, to),
        PieceKind::King => king_move_is_legal(from, to),
    }
}
