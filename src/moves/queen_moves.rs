use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

/// A queen move is legal when either the rook or the bishop rule holds.
#[inline]
pub fn queen_move_is_legal(occupancy: u64, from: Square, to: Square) -> bool {
    rook_move_is_legal(occupancy, from, to) || bishop_move_is_legal(occupancy, from, to)
}
