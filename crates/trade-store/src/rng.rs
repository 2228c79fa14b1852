/// Seed used by the dashboard fixtures. Changing it changes every generated trade.
pub const DEFAULT_SEED: u32 = 56789;

/// A tiny deterministic pseudo-random source.
///
/// Each draw takes the fractional part of `sin(state) * 10000` and then
/// advances the state by one. It is not statistically strong, but it is
/// fully reproducible across platforms that share an IEEE `sin`, which is
/// all the mock data needs.
///
/// Seeds are 32-bit so the state stays well inside the range where `f64`
/// represents every integer exactly.
#[derive(Debug, Clone)]
pub struct SineRng {
    seed: u32,
    state: u64,
}

impl SineRng {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            state: u64::from(seed),
        }
    }

    /// Rewinds the stream to its seed.
    pub fn reset(&mut self) {
        self.state = u64::from(self.seed);
    }

    /// Returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let x = (self.state as f64).sin() * 10_000.0;
        self.state = self.state.wrapping_add(1);
        x - x.floor()
    }
}

impl Default for SineRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_in_unit_interval() {
        let mut rng = SineRng::default();
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn test_reset_replays_the_stream() {
        let mut rng = SineRng::new(42);
        let first: Vec<f64> = (0..16).map(|_| rng.next_f64()).collect();
        rng.reset();
        let second: Vec<f64> = (0..16).map(|_| rng.next_f64()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_largest_seed_keeps_advancing() {
        let mut rng = SineRng::new(u32::MAX);
        let draws: Vec<f64> = (0..64).map(|_| rng.next_f64()).collect();

        assert!(draws.iter().all(|value| (0.0..1.0).contains(value)));
        assert!(draws.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SineRng::new(1);
        let mut b = SineRng::new(2);
        assert_ne!(a.next_f64(), b.next_f64());
    }
}
