use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seedable random source for the computer's random picks, so a game can be replayed from its seed.
pub struct MoveRng {
    rng: StdRng,
    seed: u64,
}

impl MoveRng {
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

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let items: Vec<usize> = (0..9).collect();
        let mut a = MoveRng::new(7);
        let mut b = MoveRng::new(7);
        for _ in 0..20 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let mut rng = MoveRng::new(1);
        let items: [usize; 0] = [];
        assert_eq!(rng.choose(&items), None);
    }
}
