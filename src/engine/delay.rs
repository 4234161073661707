//! Delay sources: where the per-character jitter comes from.

use crate::config::TypewriterConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Supplies the delay before each character is revealed.
///
/// Line pauses and cycle delays are fixed by [`TypewriterConfig`]; only the
/// per-character delay varies, which is what makes the typing look human.
pub trait DelaySource {
    /// Delay before the next character appears.
    fn char_delay(&mut self, config: &TypewriterConfig) -> Duration;
}

/// Uniform jitter in `[char_delay_min, char_delay_min + char_delay_range)`.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    rng: StdRng,
}

impl RandomDelay {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for tests and recordings.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DelaySource for RandomDelay {
    fn char_delay(&mut self, config: &TypewriterConfig) -> Duration {
        let range_us = u64::try_from(config.char_delay_range.as_micros()).unwrap_or(u64::MAX);
        if range_us == 0 {
            return config.char_delay_min;
        }
        config.char_delay_min + Duration::from_micros(self.rng.gen_range(0..range_us))
    }
}

/// Always the lower bound of the configured range.
///
/// Removes the only source of nondeterminism from the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay;

impl DelaySource for FixedDelay {
    fn char_delay(&mut self, config: &TypewriterConfig) -> Duration {
        config.char_delay_min
    }
}

impl<D: DelaySource + ?Sized> DelaySource for Box<D> {
    fn char_delay(&mut self, config: &TypewriterConfig) -> Duration {
        (**self).char_delay(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_delay_stays_in_range() {
        let config = TypewriterConfig::default();
        let mut delays = RandomDelay::seeded(7);
        for _ in 0..1000 {
            let d = delays.char_delay(&config);
            assert!(d >= config.char_delay_min);
            assert!(d < config.char_delay_max());
        }
    }

    #[test]
    fn test_seeded_delay_is_reproducible() {
        let config = TypewriterConfig::default();
        let mut a = RandomDelay::seeded(42);
        let mut b = RandomDelay::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.char_delay(&config), b.char_delay(&config));
        }
    }

    #[test]
    fn test_zero_range_is_fixed() {
        let config = TypewriterConfig::uniform(12);
        let mut delays = RandomDelay::seeded(1);
        assert_eq!(delays.char_delay(&config), Duration::from_millis(12));
        assert_eq!(FixedDelay.char_delay(&config), Duration::from_millis(12));
    }
}
