//! pulsebar - animated terminal progress bar demo
//!
//! A single decorative widget: a progress gauge that sweeps between 0% and
//! 100% in steps of 10, reversing at the bounds, while cycling through ten
//! fixed status messages. A repeating one-second tick drives all state; the
//! displayed message is derived from elapsed time on every render.
//!
//! # Modules
//!
//! - [`oscillator`] - the bounded progress sweep and its direction
//! - [`messages`] - the fixed status strings and the elapsed-time selector
//! - [`tui`] - terminal rendering, event loop, and tick timer lifecycle
//! - [`cli`] - command-line interface

pub mod cli;
pub mod messages;
pub mod oscillator;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use messages::{MESSAGES, message_index, select};
pub use oscillator::{Direction, Oscillator, STEP};
pub use tui::{App, AppState, TickTimer, TuiRunner};
