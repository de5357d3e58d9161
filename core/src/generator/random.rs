use rand::prelude::*;

use super::*;

/// Uniform draw over [`Color::PALETTE`], reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomColorSource {
    seed: u64,
    rng: SmallRng,
}

impl RandomColorSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> Color {
        Color::PALETTE[self.rng.random_range(0..Color::PALETTE.len())]
    }
}
