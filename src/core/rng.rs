// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Source of uniform draws in [0, 1). Every stochastic decision in the
/// renderer (BxDF selection, light selection, Russian roulette, hemisphere
/// warps) pulls from an injected sampler, so tests can substitute
/// deterministic sequences.
pub trait Sampler {
    fn next_1d(&mut self) -> Float;

    fn next_2d(&mut self) -> Vector2f {
        let x = self.next_1d();
        let y = self.next_1d();
        Vector2f::new(x, y)
    }
}

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

impl Sampler for LcgRng {
    fn next_1d(&mut self) -> Float {
        (self.next_u32() as Float) / ((u32::MAX as Float) + 1.0)
    }
}

/* Tests for LcgRng */

#[cfg(test)]
mod tests {
    use super::{LcgRng, Sampler};

    #[test]
    fn test_lcg_in_unit_interval() {
        let mut rng = LcgRng::new(42);
        for _ in 0..1024 {
            let u = rng.next_1d();
            assert!(u >= 0.0 && u < 1.0);
        }
    }

    #[test]
    fn test_lcg_deterministic() {
        let mut a = LcgRng::new(123);
        let mut b = LcgRng::new(123);
        for _ in 0..16 {
            assert_eq!(a.next_1d(), b.next_1d());
        }
    }
}
