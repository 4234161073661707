//! Timing configuration for the typewriter engine.
//!
//! Every delay the engine schedules comes from [`TypewriterConfig`], so the
//! cadence of the effect can be tuned (or made instant for tests) without
//! touching the state machine.

use std::time::Duration;

/// Timing knobs for the reveal loop.
///
/// The defaults reproduce the hero card cadence: 50-80ms per character,
/// 200ms between lines, a 3s hold on the finished text and a 1s blank
/// screen before the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Shortest delay before a character appears.
    pub char_delay_min: Duration,
    /// Width of the random jitter added on top of `char_delay_min`.
    ///
    /// The per-character delay is drawn from
    /// `[char_delay_min, char_delay_min + char_delay_range)`.
    pub char_delay_range: Duration,
    /// Pause after a line is fully revealed.
    pub line_pause: Duration,
    /// How long the completed text stays on screen before it is cleared.
    pub cycle_cooldown: Duration,
    /// Blank interval between the reset and the next cycle.
    pub restart_delay: Duration,
    /// Full on/off period of the caret blink.
    pub caret_blink: Duration,
}

impl TypewriterConfig {
    /// Character delay lower bound used by the hero card.
    pub const CHAR_DELAY_MIN: Duration = Duration::from_millis(50);
    /// Character delay jitter used by the hero card.
    pub const CHAR_DELAY_RANGE: Duration = Duration::from_millis(30);
    /// Inter-line pause used by the hero card.
    pub const LINE_PAUSE: Duration = Duration::from_millis(200);
    /// Hold time on the completed text.
    pub const CYCLE_COOLDOWN: Duration = Duration::from_millis(3000);
    /// Blank time before restarting.
    pub const RESTART_DELAY: Duration = Duration::from_millis(1000);
    /// Caret blink period.
    pub const CARET_BLINK: Duration = Duration::from_millis(800);

    /// A configuration where every delay is a fixed number of milliseconds.
    ///
    /// Handy for tests and for previews where jitter is unwanted.
    pub const fn uniform(step_ms: u64) -> Self {
        let step = Duration::from_millis(step_ms);
        Self {
            char_delay_min: step,
            char_delay_range: Duration::ZERO,
            line_pause: step,
            cycle_cooldown: step,
            restart_delay: step,
            caret_blink: Self::CARET_BLINK,
        }
    }

    /// Upper (exclusive) bound of the per-character delay.
    #[inline]
    pub fn char_delay_max(&self) -> Duration {
        self.char_delay_min + self.char_delay_range
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            char_delay_min: Self::CHAR_DELAY_MIN,
            char_delay_range: Self::CHAR_DELAY_RANGE,
            line_pause: Self::LINE_PAUSE,
            cycle_cooldown: Self::CYCLE_COOLDOWN,
            restart_delay: Self::RESTART_DELAY,
            caret_blink: Self::CARET_BLINK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_hero_cadence() {
        let config = TypewriterConfig::default();
        assert_eq!(config.char_delay_min, Duration::from_millis(50));
        assert_eq!(config.char_delay_max(), Duration::from_millis(80));
        assert_eq!(config.line_pause, Duration::from_millis(200));
        assert_eq!(config.cycle_cooldown, Duration::from_secs(3));
        assert_eq!(config.restart_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_uniform_has_no_jitter() {
        let config = TypewriterConfig::uniform(5);
        assert_eq!(config.char_delay_range, Duration::ZERO);
        assert_eq!(config.char_delay_max(), Duration::from_millis(5));
        assert_eq!(config.cycle_cooldown, Duration::from_millis(5));
    }
}
