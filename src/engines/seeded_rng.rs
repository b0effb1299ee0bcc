//! Reproducible randomness for move selection.
//!
//! The seed is a SplitMix64 mix of the game id and the move count, so two
//! replays of the same call sequence draw identical numbers.

use rand::rngs::StdRng;
use rand::SeedableRng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

#[inline]
const fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub const fn seed_for(game_id: u64, move_count: u32) -> u64 {
    splitmix64(splitmix64(game_id) ^ move_count as u64)
}

pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn same_inputs_give_same_seed() {
        assert_eq!(seed_for(1, 1), seed_for(1, 1));
        assert_ne!(seed_for(1, 1), seed_for(1, 3));
        assert_ne!(seed_for(1, 1), seed_for(2, 1));
    }

    #[test]
    fn generators_from_equal_seeds_agree() {
        let mut a = rng_from_seed(seed_for(7, 5));
        let mut b = rng_from_seed(seed_for(7, 5));
        let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }
}
