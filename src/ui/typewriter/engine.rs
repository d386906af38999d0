//! Timer driver for the typing effect.

use crate::platform::{TimerGuard, TimerQueue, TimerToken};
use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::reducer::TypewriterReducer;
use super::state::{TypewriterState, TypewriterTiming, TypingMode};

/// Owns the typewriter state and its single pending timer.
///
/// `E` is the event the timer queue hands back when this engine's timer
/// fires; the owner routes it to [`TypewriterEngine::on_timer`].
pub struct TypewriterEngine<E> {
    state: TypewriterState,
    timing: TypewriterTiming,
    route: E,
    pending: Option<TimerGuard>,
    disposed: bool,
}

impl<E: Clone> TypewriterEngine<E> {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming, route: E) -> Self {
        Self {
            state: TypewriterState::new(phrases),
            timing,
            route,
            pending: None,
            disposed: false,
        }
    }

    /// Start the loop. Calling it again restarts the pending delay.
    pub fn mount(&mut self, timers: &mut TimerQueue<E>) {
        if self.disposed {
            return;
        }
        if self.state.is_idle() {
            tracing::warn!("Typewriter mounted without phrases, display stays blank");
        }
        self.reschedule(timers);
    }

    /// Handle a fired timer. Returns true if the display changed.
    ///
    /// Firings after [`dispose`](Self::dispose) or from a timer that has
    /// since been replaced are ignored.
    pub fn on_timer(&mut self, token: TimerToken, timers: &mut TimerQueue<E>) -> bool {
        if self.disposed {
            return false;
        }
        match &self.pending {
            Some(guard) if guard.token() == token => {}
            _ => {
                tracing::trace!(?token, "Ignoring stale typewriter timer");
                return false;
            }
        }
        self.pending = None;

        let changed = TypewriterReducer::dispatch(&mut self.state, TypewriterIntent::Tick);
        self.reschedule(timers);
        changed
    }

    /// Cancel the pending timer and stop reacting to timers for good.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    pub fn phrase_index(&self) -> usize {
        self.state.phrase_index()
    }

    pub fn mode(&self) -> TypingMode {
        self.state.mode()
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    /// True while a timer is in flight.
    pub fn is_scheduled(&self) -> bool {
        self.pending.as_ref().is_some_and(TimerGuard::is_armed)
    }

    fn reschedule(&mut self, timers: &mut TimerQueue<E>) {
        // Dropping the old guard cancels it, so at most one timer is in flight.
        self.pending = None;
        if let Some(delay) = self.state.next_delay(&self.timing) {
            self.pending = Some(timers.schedule_once(delay, self.route.clone()));
        }
    }
}
