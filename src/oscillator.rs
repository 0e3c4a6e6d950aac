//! Progress oscillator - the bounded 0..=100 sweep
//!
//! Pure domain type with no timer or rendering knowledge. The runner calls
//! [`Oscillator::tick`] once per second and observes the returned flip flag
//! to drive timer resubscription.

use std::fmt;

/// How far the progress value moves per tick
pub const STEP: u8 = 10;

/// Upper bound of the sweep
pub const MAX_PROGRESS: u8 = 100;

/// Lower bound of the sweep
pub const MIN_PROGRESS: u8 = 0;

/// Sweep direction of the progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Progress is increasing toward 100
    #[default]
    Forward,
    /// Progress is decreasing toward 0
    Backward,
}

impl Direction {
    /// Lowercase literal used in the info line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress value bouncing between 0 and 100 in steps of 10
///
/// Invariants: progress is always a multiple of [`STEP`] within
/// `[MIN_PROGRESS, MAX_PROGRESS]`; the direction flips exactly on the tick
/// where a bound is reached, never between bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Oscillator {
    progress: u8,
    direction: Direction,
}

impl Oscillator {
    /// Start at 0, sweeping forward
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress in [0,100]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Current sweep direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one step in the current direction, clamping at the bounds.
    ///
    /// Returns true when this tick reversed the direction.
    pub fn tick(&mut self) -> bool {
        match self.direction {
            Direction::Forward => {
                self.progress = self.progress.saturating_add(STEP);
                if self.progress >= MAX_PROGRESS {
                    self.progress = MAX_PROGRESS;
                    self.direction = Direction::Backward;
                    return true;
                }
            }
            Direction::Backward => {
                self.progress = self.progress.saturating_sub(STEP);
                if self.progress == MIN_PROGRESS {
                    self.direction = Direction::Forward;
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state() {
        let osc = Oscillator::new();
        assert_eq!(osc.progress(), 0);
        assert_eq!(osc.direction(), Direction::Forward);
    }

    #[test]
    fn test_forward_sweep_flips_at_100() {
        let mut osc = Oscillator::new();

        // Nine ticks climb without flipping
        for expected in (10..=90).step_by(10) {
            assert!(!osc.tick());
            assert_eq!(osc.progress(), expected);
            assert_eq!(osc.direction(), Direction::Forward);
        }

        // Tenth tick reaches 100 and flips on that same tick
        assert!(osc.tick());
        assert_eq!(osc.progress(), 100);
        assert_eq!(osc.direction(), Direction::Backward);
    }

    #[test]
    fn test_full_cycle_returns_to_origin() {
        let mut osc = Oscillator::new();

        for _ in 0..10 {
            osc.tick();
        }
        assert_eq!(osc.progress(), 100);

        for _ in 0..9 {
            assert!(!osc.tick());
            assert_eq!(osc.direction(), Direction::Backward);
        }

        assert!(osc.tick());
        assert_eq!(osc.progress(), 0);
        assert_eq!(osc.direction(), Direction::Forward);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Backward.to_string(), "backward");
    }

    proptest! {
        #[test]
        fn prop_progress_stays_bounded_and_stepped(n in 0usize..1000) {
            let mut osc = Oscillator::new();
            for _ in 0..n {
                osc.tick();
            }
            prop_assert!(osc.progress() <= MAX_PROGRESS);
            prop_assert_eq!(osc.progress() % STEP, 0);
        }

        #[test]
        fn prop_flip_only_at_bounds(n in 0usize..1000) {
            let mut osc = Oscillator::new();
            for _ in 0..n {
                let flipped = osc.tick();
                if flipped {
                    prop_assert!(osc.progress() == MIN_PROGRESS || osc.progress() == MAX_PROGRESS);
                }
            }
        }

        #[test]
        fn prop_period_is_twenty_ticks(n in 0usize..100) {
            // 10 ticks up + 10 ticks down returns to the initial state
            let mut osc = Oscillator::new();
            for _ in 0..(n * 20) {
                osc.tick();
            }
            prop_assert_eq!(osc, Oscillator::new());
        }
    }
}
