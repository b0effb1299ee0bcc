//! Pawn rules. Forward only: single push, double push from the starting row
//! through an empty square, diagonal step only as a capture. No en passant and
//! no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{row_of, Color, Square};
use crate::moves::move_shared::{offset_square, targets_from_offsets};

pub const WHITE_PAWN_CAPTURES: [u64; 64] = targets_from_offsets(&[(-1, -1), (-1, 1)]);
pub const BLACK_PAWN_CAPTURES: [u64; 64] = targets_from_offsets(&[(1, -1), (1, 1)]);

/// Squares a pawn of `color` on `square` attacks diagonally.
#[inline]
pub const fn pawn_captures(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[square as usize],
        Color::Black => BLACK_PAWN_CAPTURES[square as usize],
    }
}

pub fn pawn_move_is_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let forward = color.forward();

    if offset_square(from, forward, 0) == Some(to) {
        return board.is_empty(to);
    }

    if row_of(from) == color.pawn_start_row() && offset_square(from, 2 * forward, 0) == Some(to) {
        return match offset_square(from, forward, 0) {
            Some(between) => board.is_empty(between) && board.is_empty(to),
            None => false,
        };
    }

    if pawn_captures(color, from) & (1u64 << to) != 0 {
        return board.color_at(to) == Some(color.opposite());
    }

    false
}
