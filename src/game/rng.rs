//! Deterministic pseudo-random rolls.
//!
//! The labyrinth never touches system entropy. Every roll is a pure function of
//! a seed (normally the number of steps the player has taken) and a modulo, so
//! replaying the same path through the rooms replays the same events.

const SEED_SCALE: f64 = 12.9898;
const SPREAD: f64 = 43758.5453;

/// Map `seed` to an integer in `[0, modulo)` using a sine hash.
///
/// Returns 0 when `modulo <= 0`.
pub fn pseudo_random(seed: i64, modulo: i64) -> i64 {
    if modulo <= 0 {
        return 0;
    }

    let x = (seed as f64 * SEED_SCALE).sin() * SPREAD;
    let frac = x - x.floor();
    let value = (frac * modulo as f64).floor() as i64;
    // float rounding can land exactly on `modulo`
    value.clamp(0, modulo - 1)
}

/// Convenience wrapper for index selection over a collection of `len` items.
///
/// Returns 0 for an empty collection; callers must check emptiness first.
pub fn pseudo_index(seed: u32, len: usize) -> usize {
    pseudo_random(i64::from(seed), len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_modulo_yields_zero() {
        for seed in [-5, 0, 1, 42, 10_000] {
            assert_eq!(pseudo_random(seed, 0), 0);
            assert_eq!(pseudo_random(seed, -3), 0);
        }
    }

    #[test]
    fn stays_in_range() {
        for modulo in [1, 2, 3, 7, 10, 100] {
            for seed in -50..500 {
                let v = pseudo_random(seed, modulo);
                assert!(
                    (0..modulo).contains(&v),
                    "seed {} modulo {} gave {}",
                    seed,
                    modulo,
                    v
                );
            }
        }
    }

    #[test]
    fn same_inputs_same_output() {
        for seed in 0..200 {
            assert_eq!(pseudo_random(seed, 10), pseudo_random(seed, 10));
        }
    }

    #[test]
    fn modulo_one_is_always_zero() {
        for seed in 0..100 {
            assert_eq!(pseudo_random(seed, 1), 0);
        }
    }

    #[test]
    fn spreads_across_buckets() {
        let mut seen = [false; 10];
        for seed in 0..500 {
            seen[pseudo_random(seed, 10) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every bucket should be hit: {:?}", seen);
    }

    #[test]
    fn index_matches_raw_roll() {
        for steps in 0..50u32 {
            assert_eq!(pseudo_index(steps, 4) as i64, pseudo_random(i64::from(steps), 4));
        }
        assert_eq!(pseudo_index(3, 0), 0);
    }
}
