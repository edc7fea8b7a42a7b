//! Numeric counter animation for the stats block.

use std::time::Duration;

/// How a counter animation is paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    /// Number of ticks from 0 to the target
    pub steps: u32,
    /// Interval between ticks
    pub interval: Duration,
}

impl Default for CounterSpec {
    fn default() -> Self {
        Self {
            steps: 50,
            interval: Duration::from_millis(50),
        }
    }
}

/// Counts a displayed integer up from 0 to a fixed target.
///
/// The value after tick `n` is `floor(target * n / steps)`, so the final
/// tick lands exactly on the target and the value never overshoots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    steps: u32,
    ticks: u32,
    value: u64,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            steps,
            ticks: 0,
            value: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Currently displayed integer.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.value == self.target && self.ticks > 0
    }

    /// Advance one step. Returns true once the target is reached, at which
    /// point the owner must stop its timer.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return true;
        }
        self.ticks = self.ticks.saturating_add(1);

        if self.ticks >= self.steps {
            self.value = self.target;
        } else {
            let scaled = u128::from(self.target) * u128::from(self.ticks) / u128::from(self.steps);
            self.value = (scaled as u64).min(self.target);
        }
        self.value == self.target
    }

    /// Text shown for the current value.
    pub fn display(&self) -> String {
        format_counter(self.value, self.target)
    }
}

/// Format a counter value, adding a `+` suffix when the target exceeds 10.
pub fn format_counter(value: u64, target: u64) -> String {
    if target > 10 {
        format!("{}+", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_exactly_on_last_step() {
        let mut counter = CounterAnimation::new(120, 50);
        let mut finished_at = None;
        for n in 1..=60 {
            if counter.tick() {
                finished_at = Some(n);
                break;
            }
            assert!(counter.value() < 120);
        }
        assert_eq!(finished_at, Some(50));
        assert_eq!(counter.value(), 120);
        assert_eq!(counter.display(), "120+");
    }

    #[test]
    fn value_never_exceeds_target_and_is_monotonic() {
        let mut counter = CounterAnimation::new(7, 50);
        let mut prev = 0;
        while !counter.tick() {
            assert!(counter.value() >= prev);
            assert!(counter.value() <= 7);
            prev = counter.value();
        }
        assert_eq!(counter.value(), 7);
    }

    #[test]
    fn small_target_has_no_plus_suffix() {
        let mut counter = CounterAnimation::new(5, 50);
        while !counter.tick() {}
        assert_eq!(counter.display(), "5");
    }

    #[test]
    fn target_of_ten_has_no_suffix_eleven_does() {
        assert_eq!(format_counter(10, 10), "10");
        assert_eq!(format_counter(11, 11), "11+");
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0, 50);
        assert!(!counter.is_finished());
        assert!(counter.tick());
        assert_eq!(counter.display(), "0");
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        let mut counter = CounterAnimation::new(30, 0);
        assert!(counter.tick());
        assert_eq!(counter.value(), 30);
    }

    #[test]
    fn ticking_after_finish_is_stable() {
        let mut counter = CounterAnimation::new(3, 2);
        counter.tick();
        assert!(counter.tick());
        assert!(counter.tick());
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn default_spec_runs_for_two_and_a_half_seconds() {
        let spec = CounterSpec::default();
        assert_eq!(spec.interval * spec.steps, Duration::from_millis(2500));
    }
}
