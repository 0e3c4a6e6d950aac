//! TUI Runner - main loop that owns the terminal and the tick timer
//!
//! The TuiRunner is responsible for:
//! - Subscribing the 1s logic tick and resubscribing when direction flips
//! - Dispatching input events to App for handling
//! - Rendering at ~30 FPS

use std::time::Duration;

use eyre::Result;
use tracing::debug;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::timer::TickTimer;
use super::views;

/// Period of the logic tick driving progress and the elapsed clock
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Redraw cadence (~30 FPS)
const FRAME_RATE: Duration = Duration::from_millis(33);

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state and key handling
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Input event handler
    event_handler: EventHandler,
    /// The live tick subscription
    timer: TickTimer,
}

impl TuiRunner {
    /// Create a new TuiRunner owning the given terminal
    pub fn new(terminal: Tui) -> Self {
        Self {
            app: App::new(),
            terminal,
            event_handler: EventHandler::new(FRAME_RATE),
            timer: TickTimer::subscribe(TICK_PERIOD),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Draw the UI
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            // Wait for input or the next logic tick
            tokio::select! {
                event = self.event_handler.next() => {
                    match event? {
                        Event::Key(key_event) => {
                            if self.app.handle_key(key_event) {
                                break;
                            }
                        }
                        Event::Resize(_, _) | Event::Frame => {
                            // Redraw happens at the top of the loop
                        }
                    }
                }
                tick = self.timer.tick() => {
                    if tick.is_some() {
                        self.handle_tick();
                    }
                }
            }

            // Check if we should quit
            if self.app.state().should_quit {
                break;
            }
        }

        // Release the timer before the terminal is restored
        self.timer.cancel();

        Ok(())
    }

    /// Handle a logic tick - advance state, resubscribe the timer on flips
    fn handle_tick(&mut self) {
        let flipped = self.app.state_mut().tick();

        if flipped {
            debug!(
                "Direction flipped to {} at {}s, resubscribing tick timer",
                self.app.state().direction(),
                self.app.state().elapsed_seconds
            );
            self.resubscribe_timer();
        }
    }

    /// Tear down the current tick subscription and start a fresh one with
    /// the same period. The old subscription is cancelled first so two
    /// timers can never be live at once.
    fn resubscribe_timer(&mut self) {
        self.timer.cancel();
        self.timer = TickTimer::subscribe(TICK_PERIOD);
    }
}
