//! Tick timer subscription
//!
//! The 1000ms logic tick is a scoped resource: `subscribe` spawns a task that
//! delivers one message per period, `cancel` (or drop) aborts it. The runner
//! holds exactly one live subscription at a time and replaces it whenever the
//! sweep direction changes, tearing the old one down first so a recurring
//! callback can never outlive its owner.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A running repeating-timer subscription
#[derive(Debug)]
pub struct TickTimer {
    rx: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl TickTimer {
    /// Start a repeating timer with the given period.
    ///
    /// The first tick arrives one full period after subscription, not
    /// immediately.
    pub fn subscribe(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // tokio intervals fire immediately on first tick; swallow it so
            // subscribers see period-spaced ticks only
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Wait for the next tick. Returns None once the timer is cancelled.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Stop the timer. No further ticks will be delivered.
    pub fn cancel(&mut self) {
        self.task.abort();
        self.rx.close();
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_timer_delivers_ticks() {
        let mut timer = TickTimer::subscribe(Duration::from_millis(10));

        for _ in 0..3 {
            let tick = timeout(Duration::from_secs(1), timer.tick()).await;
            assert!(tick.is_ok(), "Tick should arrive within a second");
            assert_eq!(tick.unwrap(), Some(()));
        }
    }

    #[tokio::test]
    async fn test_first_tick_is_delayed() {
        let mut timer = TickTimer::subscribe(Duration::from_millis(50));

        // Immediately after subscribing there must be no tick yet
        let immediate = timeout(Duration::from_millis(5), timer.tick()).await;
        assert!(immediate.is_err(), "Tick should not fire at subscription time");
    }

    #[tokio::test]
    async fn test_cancel_stops_ticks() {
        let mut timer = TickTimer::subscribe(Duration::from_millis(10));

        // Let at least one tick through to prove the timer was live
        let first = timeout(Duration::from_secs(1), timer.tick()).await;
        assert!(first.is_ok());

        timer.cancel();

        // Drain whatever was buffered; the channel must then report closed
        let mut remaining = 0;
        while let Some(()) = timer.tick().await {
            remaining += 1;
        }
        assert!(remaining <= 1, "At most one buffered tick may remain after cancel");
    }
}
