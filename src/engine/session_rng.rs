use std::fmt;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn choose<'a, T>(&mut self, values: &'a [T]) -> Option<&'a T> {
        values.choose(&mut self.rng)
    }
}

impl fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);

        for _ in 0..20 {
            let a: usize = first.random_range(0..3);
            let b: usize = second.random_range(0..3);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_range_bounds_respected() {
        let mut rng = SessionRng::new(7);
        for _ in 0..100 {
            let value: usize = rng.random_range(0..3);
            assert!(value < 3);
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(SessionRng::new(1234).seed(), 1234);
    }

    #[test]
    fn test_choose_picks_a_listed_value() {
        let values = [10, 20, 30];
        let mut rng = SessionRng::new(5);

        for _ in 0..50 {
            let picked = rng.choose(&values).copied();
            assert!(values.contains(&picked.unwrap()));
        }
    }

    #[test]
    fn test_choose_from_empty_slice() {
        let mut rng = SessionRng::new(5);
        let values: [usize; 0] = [];

        assert_eq!(rng.choose(&values), None);
    }
}
