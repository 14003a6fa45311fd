//! # Cooperative Timer Queue
//!
//! Every mounted section owns one [`Scheduler`]. Processes register one-shot
//! or repeating timers against it; the section drains due timers each frame.
//!
//! ## Design
//!
//! - Time is virtual: it only moves when the owner calls [`Scheduler::pop_due`]
//!   or [`Scheduler::settle`]
//! - Timers fire in due order; ties fire in registration order
//! - While draining, `now()` equals the due time of the timer just popped,
//!   so anything scheduled from a handler is measured from when it should
//!   have fired, not from the end of the frame
//! - [`Scheduler::cancel_all`] drops every pending timer; nothing fires after it

use std::time::Duration;

/// Handle to a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Whether a timer fires once or keeps firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug, Clone)]
struct Timer<K> {
    id: TimerId,
    key: K,
    due: Duration,
    repeat: Repeat,
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    /// What the timer was registered for.
    pub key: K,
    /// Timer handle.
    pub id: TimerId,
    /// Virtual time the timer was due at.
    pub due: Duration,
}

/// Virtual-time timer queue keyed by `K`.
#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    timers: Vec<Timer<K>>,
    now: Duration,
    next_id: u64,
}

impl<K: Copy> Scheduler<K> {
    /// Creates an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: Vec::with_capacity(16),
            now: Duration::ZERO,
            next_id: 0,
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    fn register(&mut self, key: K, delay: Duration, repeat: Repeat) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            key,
            due: self.now + delay,
            repeat,
        });
        id
    }

    /// Fires `key` once, `delay` from now.
    pub fn schedule_once(&mut self, key: K, delay: Duration) -> TimerId {
        self.register(key, delay, Repeat::Once)
    }

    /// Fires `key` every `period`, starting one period from now.
    ///
    /// A zero period is bumped to one millisecond so draining always terminates.
    pub fn schedule_every(&mut self, key: K, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.register(key, period, Repeat::Every(period))
    }

    /// Cancels a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Pops the earliest timer due at or before `until`.
    ///
    /// Advances `now()` to that timer's due time. Repeating timers are
    /// re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<K>> {
        // IDs grow with registration, so (due, id) orders ties by registration.
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.id.0))
            .map(|(index, _)| index)?;

        let timer = &self.timers[index];
        let fired = Fired {
            key: timer.key,
            id: timer.id,
            due: timer.due,
        };
        let repeat = timer.repeat;
        self.now = self.now.max(fired.due);

        match repeat {
            Repeat::Once => {
                self.timers.swap_remove(index);
            }
            Repeat::Every(period) => self.timers[index].due += period,
        }

        Some(fired)
    }

    /// Moves `now()` forward to `until` once the due timers have been drained.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<K: Copy> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
