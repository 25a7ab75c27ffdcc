use crate::Loc;
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::SmallRng;

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Same seed, same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// `p` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn next_bool(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.random_bool(p)
    }

    /// Each cell of a `rows` x `cols` board independently, with probability
    /// `p` (clamped as in [`Random::next_bool`]). Dimensions past `i32::MAX`
    /// are capped there, since no grid can be larger.
    pub fn random_locs(&mut self, rows: u32, cols: u32, p: f64) -> Vec<Loc> {
        let max = i32::MAX as u32;
        let (rows, cols) = (rows.min(max) as i32, cols.min(max) as i32);
        let mut result = vec![];
        for row in 0..rows {
            for col in 0..cols {
                if self.next_bool(p) {
                    result.push(Loc::new(row, col));
                }
            }
        }
        result
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_repeatable() {
        let first = Random::seeded(7).random_locs(10, 10, 0.3);
        let second = Random::seeded(7).random_locs(10, 10, 0.3);
        assert_eq!(first, second);
    }

    #[test]
    fn extremes_of_probability() {
        let mut rand = Random::seeded(1);
        assert!(rand.random_locs(4, 4, 0.0).is_empty());
        assert_eq!(rand.random_locs(4, 4, 1.0).len(), 16);
    }

    #[test]
    fn probability_outside_unit_range_is_clamped() {
        let mut rand = Random::seeded(2);
        assert!(rand.random_locs(3, 3, -0.5).is_empty());
        assert!(rand.random_locs(3, 3, f64::NAN).is_empty());
        assert_eq!(rand.random_locs(3, 3, 1.5).len(), 9);
        assert!(rand.next_bool(2.0));
        assert!(!rand.next_bool(-1.0));
    }

    #[test]
    fn locs_stay_on_board() {
        let locs = Random::seeded(3).random_locs(3, 7, 0.5);
        assert!(locs.iter().all(|loc| loc.grid_index(3, 7).is_some()));
    }
}
