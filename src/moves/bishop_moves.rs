use crate::game_state::chess_types::Square;
use crate::moves::move_shared::slide_is_clear;

/// Same diagonal with nothing strictly in between.
#[inline]
pub fn bishop_move_is_legal(occupancy: u64, from: Square, to: Square) -> bool {
    slide_is_clear(occupancy, from, to, false, true)
}

#[cfg(test)]
mod tests {
    use super::bishop_move_is_legal;

    #[test]
    fn bishop_moves_along_open_diagonal() {
        // c1 (58) towards a3 (40) and h6 (23) on an empty board.
        assert!(bishop_move_is_legal(0, 58, 40));
        assert!(bishop_move_is_legal(0, 58, 23));
        assert!(!bishop_move_is_legal(0, 58, 50));
    }

    #[test]
    fn bishop_blocked_by_piece_in_between() {
        let blocker_on_d2 = 1u64 << 51;
        assert!(!bishop_move_is_legal(blocker_on_d2, 58, 44));
        assert!(bishop_move_is_legal(blocker_on_d2, 58, 51));
    }
}
