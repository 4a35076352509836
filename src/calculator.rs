use std::time::Duration;

use futures::stream::{self, Stream};
use log::debug;
use tokio::sync::watch;

use crate::config::{FETCH_RESULT_DELAY_MILLIS, STATE_UPDATE_DELAY_MILLIS};

/// Toy stateful component the guide's test suites are written against.
///
/// Holds a plain counter and a single-slot observable value. The two
/// suspending operations simulate long-running work with cooperative
/// delays, so tests drive them on a paused tokio clock instead of
/// sleeping for real.
pub struct StatefulCalculator {
    counter: u64,
    observed: watch::Sender<i64>,
}

impl StatefulCalculator {
    pub fn new() -> Self {
        let (observed, _) = watch::channel(0);
        Self {
            counter: 0,
            observed,
        }
    }

    /// Pure integer addition.
    pub fn add_integers(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    /// Pure floating-point addition. Callers should compare the result
    /// with an epsilon, not exact equality.
    pub fn add_floats(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Increments the counter by exactly one.
    pub fn increment_state(&mut self) {
        self.counter += 1;
    }

    /// Current counter value.
    pub fn get_state(&self) -> u64 {
        self.counter
    }

    /// Simulates a long-running fetch: suspends for a fixed delay, then
    /// returns a constant. The delay is a scheduling yield, not a busy
    /// wait, so concurrent tasks keep running.
    pub async fn fetch_result(&self) -> i64 {
        debug!("fetch_result: suspending for {FETCH_RESULT_DELAY_MILLIS}ms");
        tokio::time::sleep(Duration::from_millis(FETCH_RESULT_DELAY_MILLIS)).await;
        42
    }

    /// Lazy finite stream yielding 1, 2, 3 with no delay between
    /// emissions. Every call returns a fresh stream; there is no shared
    /// cursor between consumers.
    pub fn result_stream(&self) -> impl Stream<Item = i64> {
        stream::iter([1, 2, 3])
    }

    /// Suspends for a fixed delay, then commits `new_value` to the
    /// observable cell. Readers see the prior value for the entire
    /// delay; the assignment happens atomically at the end.
    pub async fn update_state(&self, new_value: i64) {
        debug!("update_state: suspending for {STATE_UPDATE_DELAY_MILLIS}ms before committing {new_value}");
        tokio::time::sleep(Duration::from_millis(STATE_UPDATE_DELAY_MILLIS)).await;
        self.observed.send_replace(new_value);
    }

    /// Synchronous read of the observable value: the last committed
    /// write, or 0 if nothing has been committed yet.
    pub fn observed_value(&self) -> i64 {
        *self.observed.borrow()
    }

    /// Read-only view of the observable value for external observers.
    pub fn subscribe(&self) -> watch::Receiver<i64> {
        self.observed.subscribe()
    }
}

impl Default for StatefulCalculator {
    fn default() -> Self {
        Self::new()
    }
}
