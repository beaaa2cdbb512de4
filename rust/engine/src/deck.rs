use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, MAX_VALUE, MIN_VALUE};

/// Seeded source of card values and opponent choices.
#[derive(Debug)]
pub struct ValueRoller {
    seed: u64,
    rng: ChaCha20Rng,
}

impl ValueRoller {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn roll(&mut self) -> u8 {
        self.rng.random_range(MIN_VALUE..=MAX_VALUE)
    }

    /// Re-rolls every card's value in arena order.
    pub fn deal(&mut self, cards: &mut [Card]) {
        for c in cards {
            c.value = Some(self.roll());
        }
    }

    pub fn rng_mut(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }
}
