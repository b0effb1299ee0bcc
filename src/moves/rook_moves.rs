use crate::game_state::chess_types::Square;
use crate::moves::move_shared::slide_is_clear;

/// Same row or column with nothing strictly in between.
#[inline]
pub fn rook_move_is_legal(occupancy: u64, from: Square, to: Square) -> bool {
    slide_is_clear(occupancy, from, to, true, false)
}

#[cfg(test)]
mod tests {
    use super::rook_move_is_legal;

    #[test]
    fn rook_moves_along_rows_and_columns() {
        assert!(rook_move_is_legal(0, 56, 0));
        assert!(rook_move_is_legal(0, 56, 63));
        assert!(!rook_move_is_legal(0, 56, 49));
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let blocker_on_a4 = 1u64 << 32;
        assert!(rook_move_is_legal(blocker_on_a4, 56, 32));
        assert!(!rook_move_is_legal(blocker_on_a4, 56, 24));
    }
}
