//! Canonical chess-rule constants.
//!
//! Holds the standard starting layout in piece codes, indexed by
//! `row * 8 + col` with the black back rank on row 0.

use crate::game_state::chess_types::{PieceCode, BOARD_SQUARES};

/// Standard starting position. Row 0: black back rank, row 1: black pawns,
/// rows 6 and 7: white pawns and white back rank.
#[rustfmt::skip]
pub const STARTING_LAYOUT: [PieceCode; BOARD_SQUARES] = [
    10,  8,  9, 11, 12,  9,  8, 10,
     7,  7,  7,  7,  7,  7,  7,  7,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     1,  1,  1,  1,  1,  1,  1,  1,
     4,  2,  3,  5,  6,  3,  2,  4,
];
