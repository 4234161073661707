//! Caret blink phase.

use std::time::Duration;

/// Blinking block caret.
///
/// Visibility is a pure function of elapsed time: visible for the first half
/// of each period, hidden for the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    period: Duration,
}

impl Caret {
    /// Glyph drawn for the caret.
    pub const GLYPH: char = '▎';

    /// A caret blinking once per `period`. A zero period never blinks.
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Blink period.
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Whether the caret is lit at `elapsed`.
    pub fn visible_at(&self, elapsed: Duration) -> bool {
        let period = self.period.as_micros();
        if period == 0 {
            return true;
        }
        elapsed.as_micros() % period < period / 2
    }

    /// Time until the next visibility change after `elapsed`.
    pub fn until_toggle(&self, elapsed: Duration) -> Duration {
        let period = self.period.as_micros();
        if period == 0 {
            return Duration::MAX;
        }
        let half = period / 2;
        let into = elapsed.as_micros() % period;
        let left = if into < half { half - into } else { period - into };
        Duration::from_micros(u64::try_from(left).unwrap_or(u64::MAX))
    }
}

impl Default for Caret {
    fn default() -> Self {
        Self::new(crate::config::TypewriterConfig::CARET_BLINK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_blink_phases() {
        let caret = Caret::default();
        assert!(caret.visible_at(Duration::ZERO));
        assert!(caret.visible_at(399 * MS));
        assert!(!caret.visible_at(400 * MS));
        assert!(!caret.visible_at(799 * MS));
        assert!(caret.visible_at(800 * MS));
    }

    #[test]
    fn test_until_toggle() {
        let caret = Caret::default();
        assert_eq!(caret.until_toggle(Duration::ZERO), 400 * MS);
        assert_eq!(caret.until_toggle(500 * MS), 300 * MS);
    }

    #[test]
    fn test_zero_period_is_solid() {
        let caret = Caret::new(Duration::ZERO);
        assert!(caret.visible_at(123 * MS));
        assert_eq!(caret.until_toggle(Duration::ZERO), Duration::MAX);
    }
}
