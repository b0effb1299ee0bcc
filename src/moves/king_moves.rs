//! King steps, precomputed per square at compile time. No castling.

use crate::game_state::chess_types::Square;
use crate::moves::move_shared::targets_from_offsets;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = targets_from_offsets(&KING_OFFSETS);

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square as usize]
}

#[inline]
pub fn king_move_is_legal(from: Square, to: Square) -> bool {
    king_targets(from) & (1u64 << to) != 0
}
