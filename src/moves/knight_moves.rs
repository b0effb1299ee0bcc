//! Knight jumps, precomputed per square at compile time.

use crate::game_state::chess_types::Square;
use crate::moves::move_shared::targets_from_offsets;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KNIGHT_TARGETS: [u64; 64] = targets_from_offsets(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[square as usize]
}

/// Intervening squares do not matter for a knight.
#[inline]
pub fn knight_move_is_legal(from: Square, to: Square) -> bool {
    knight_targets(from) & (1u64 << to) != 0
}
