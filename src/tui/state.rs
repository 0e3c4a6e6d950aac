//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//! All mutation happens through `tick()`, called once per second by the
//! runner; the render pass only reads.

use crate::messages;
use crate::oscillator::{Direction, Oscillator};

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The bounded progress sweep
    pub oscillator: Oscillator,
    /// Whole seconds since the widget started; increments once per tick,
    /// never resets
    pub elapsed_seconds: u64,
    /// Set when the user requests exit
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state: progress 0, sweeping forward, zero elapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one logic tick: bump the elapsed clock and advance the sweep.
    ///
    /// The elapsed clock increments unconditionally, independent of the
    /// oscillator outcome. Returns true when this tick reversed the sweep
    /// direction (the runner resubscribes its timer on that signal).
    pub fn tick(&mut self) -> bool {
        self.elapsed_seconds += 1;
        self.oscillator.tick()
    }

    /// Current progress percentage in [0,100]
    pub fn progress(&self) -> u8 {
        self.oscillator.progress()
    }

    /// Current sweep direction
    pub fn direction(&self) -> Direction {
        self.oscillator.direction()
    }

    /// The status message for the current elapsed time.
    ///
    /// Derived on every call rather than stored, so it can never drift out
    /// of sync with the elapsed clock.
    pub fn message(&self) -> &'static str {
        messages::select(self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert_eq!(state.progress(), 0);
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(state.elapsed_seconds, 0);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_elapsed_counts_every_tick() {
        let mut state = AppState::new();
        for n in 1..=25 {
            state.tick();
            assert_eq!(state.elapsed_seconds, n);
        }
    }

    #[test]
    fn test_elapsed_independent_of_clamping() {
        let mut state = AppState::new();
        // Run well past both clamp points
        for _ in 0..47 {
            state.tick();
        }
        assert_eq!(state.elapsed_seconds, 47);
    }

    #[test]
    fn test_message_follows_elapsed() {
        let mut state = AppState::new();
        assert_eq!(state.message(), "Initializing system...");

        state.tick();
        assert_eq!(state.message(), "Initializing system...");

        state.tick();
        assert_eq!(state.message(), "Loading resources...");
    }

    #[test]
    fn test_tick_reports_direction_flip() {
        let mut state = AppState::new();
        for _ in 0..9 {
            assert!(!state.tick());
        }
        assert!(state.tick(), "Tenth tick reaches 100 and flips");
        assert_eq!(state.direction(), Direction::Backward);
    }
}
