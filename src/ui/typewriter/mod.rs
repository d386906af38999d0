//! Hero typing effect.
//!
//! Cycles through phrases forever, typing and deleting one character per
//! tick.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phrase index, typed prefix and mode (Typing / Deleting)
//! - `intent.rs` - Timer tick
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `engine.rs` - Owns the single pending timer and reschedules after
//!   each tick

mod engine;
mod intent;
mod reducer;
mod state;

pub use engine::TypewriterEngine;
pub use intent::TypewriterIntent;
pub use reducer::TypewriterReducer;
pub use state::{TypewriterState, TypewriterTiming, TypingMode, MIN_TICK};
