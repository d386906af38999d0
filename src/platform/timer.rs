//! One-shot timers on a virtual clock.
//!
//! The queue never reads the wall clock. The runtime maps elapsed real time
//! onto [`TimerQueue::pop_due`] / [`TimerQueue::advance_to`]; tests advance it
//! by hand, which keeps every timed animation deterministic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Identifies one scheduled timer. Compared against [`Fired::token`] to reject
/// callbacks from a timer that has since been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Cancel handle returned by [`TimerQueue::schedule_once`].
///
/// Dropping the guard cancels the timer, so an owner that goes away can never
/// be called back.
#[derive(Debug)]
pub struct TimerGuard {
    token: TimerToken,
    armed: Arc<AtomicBool>,
}

impl TimerGuard {
    pub fn token(&self) -> TimerToken {
        self.token
    }

    /// True until the timer fires or is cancelled.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A timer whose deadline has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub token: TimerToken,
    pub event: E,
}

struct Pending<E> {
    deadline: Duration,
    token: TimerToken,
    armed: Arc<AtomicBool>,
    event: E,
}

pub struct TimerQueue<E> {
    now: Duration,
    next_token: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_token: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerGuard {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        let armed = Arc::new(AtomicBool::new(true));
        self.pending.push(Pending {
            deadline: self.now.saturating_add(delay),
            token,
            armed: Arc::clone(&armed),
            event,
        });
        TimerGuard { token, armed }
    }

    /// Remove and return the earliest armed timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline, so timers rescheduled from
    /// inside the callback are measured from when the previous one was due.
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<E>> {
        self.prune();
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.token.0))
            .map(|(i, _)| i)?;

        let due = self.pending.swap_remove(index);
        due.armed.store(false, Ordering::SeqCst);
        self.now = self.now.max(due.deadline);
        Some(Fired {
            token: due.token,
            event: due.event,
        })
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Deadline of the earliest armed timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .filter(|p| p.armed.load(Ordering::SeqCst))
            .map(|p| p.deadline)
            .min()
    }

    /// Number of timers that are still armed.
    pub fn pending_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| p.armed.load(Ordering::SeqCst))
            .count()
    }

    fn prune(&mut self) {
        self.pending.retain(|p| p.armed.load(Ordering::SeqCst));
    }
}
