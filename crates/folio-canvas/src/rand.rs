//! Lightweight xorshift32 PRNG for particle seeding

pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1). Uses the top 24 bits so the result never reaches 1.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..10_000 {
            let v = rng.range(0.0, 10.0);
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn rng_symmetric_range() {
        let mut rng = ParticleRng::new(7);
        let (mut below, mut above) = (0, 0);
        for _ in 0..1000 {
            let v = rng.range(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&v));
            if v < 0.0 {
                below += 1;
            } else {
                above += 1;
            }
        }
        assert!(below > 300 && above > 300);
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut rng = ParticleRng::new(0);
        let a = rng.next_f64();
        let b = rng.next_f64();
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ParticleRng::new(0xDEAD_BEEF);
        let mut b = ParticleRng::new(0xDEAD_BEEF);
        for _ in 0..16 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }
}
