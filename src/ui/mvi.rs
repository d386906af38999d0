//! Unidirectional state machines for the page.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └── timers, pointer, viewport ──┘
//! ```
//!
//! A reducer never touches timers or media. Whoever owns the state issues
//! those requests after dispatching.

/// Snapshot a view renders from. Replaced wholesale on every transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a timer fired, the pointer moved, the card
/// scrolled out of view.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduce `slot` in place. Returns true if the state changed.
    fn dispatch(slot: &mut Self::State, intent: Self::Intent) -> bool {
        let before = std::mem::take(slot);
        let after = Self::reduce(before.clone(), intent);
        let changed = after != before;
        *slot = after;
        changed
    }
}
