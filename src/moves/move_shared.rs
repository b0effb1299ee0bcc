//! Geometry helpers shared by the per-piece move rules.
//!
//! Squares are `row * 8 + col`. Row and column deltas are signed so rules can
//! reason about direction (white pawns move to lower rows, black to higher).

use crate::game_state::chess_types::{col_of, row_of, Square};

/// Square reached by stepping `(d_row, d_col)` from `square`, or `None` when
/// the step leaves the board.
#[inline]
pub const fn offset_square(square: Square, d_row: i8, d_col: i8) -> Option<Square> {
    let row = row_of(square) as i8 + d_row;
    let col = col_of(square) as i8 + d_col;
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return None;
    }
    Some((row * 8 + col) as Square)
}

/// `(to_row - from_row, to_col - from_col)`.
#[inline]
pub const fn square_delta(from: Square, to: Square) -> (i8, i8) {
    (
        row_of(to) as i8 - row_of(from) as i8,
        col_of(to) as i8 - col_of(from) as i8,
    )
}

/// Builds a per-square target mask for a piece that jumps by fixed offsets.
pub const fn targets_from_offsets(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut mask = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            if let Some(target) = offset_square(sq as Square, offsets[i].0, offsets[i].1) {
                mask |= 1u64 << target;
            }
            i += 1;
        }
        table[sq] = mask;
        sq += 1;
    }

    table
}

/// Walks from `from` towards `to` one `(step_row, step_col)` at a time and
/// reports whether every square strictly between them is empty. `to` must lie
/// on that line.
pub fn path_is_clear(occupancy: u64, from: Square, to: Square, step_row: i8, step_col: i8) -> bool {
    let mut current = from;
    loop {
        let Some(next) = offset_square(current, step_row, step_col) else {
            return false;
        };
        if next == to {
            return true;
        }
        if occupancy & (1u64 << next) != 0 {
            return false;
        }
        current = next;
    }
}

/// Sliding move along a row, column or diagonal. `straight` enables rook
/// lines and `diagonal` bishop lines.
pub fn slide_is_clear(occupancy: u64, from: Square, to: Square, straight: bool, diagonal: bool) -> bool {
    let (d_row, d_col) = square_delta(from, to);
    if d_row == 0 && d_col == 0 {
        return false;
    }
    let is_straight = d_row == 0 || d_col == 0;
    let is_diagonal = d_row.abs() == d_col.abs();
    if !((straight && is_straight) || (diagonal && is_diagonal)) {
        return false;
    }
    path_is_clear(occupancy, from, to, d_row.signum(), d_col.signum())
}
