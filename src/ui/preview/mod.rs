//! Project card media preview.
//!
//! Decides per card whether the static image or the looping video is shown,
//! driven by hover (pointer devices), tap-toggle (touch devices) and
//! viewport visibility.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Collapsed preview phase (Idle / Buffering / Playing /
//!   Blocked) plus visibility and video availability
//! - `intent.rs` - Pointer signals, visibility, media readiness
//! - `strategy.rs` - Hover-driven or tap-driven input, chosen once
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Owns the media element and registrations, issues
//!   play / pause / seek requests around dispatch

mod controller;
mod intent;
mod reducer;
mod state;
mod strategy;

pub use controller::PreviewCard;
pub use intent::PreviewIntent;
pub use reducer::PreviewReducer;
pub use state::{PreviewPhase, PreviewState, PreviewVisual, VideoAvailability};
pub use strategy::{Gesture, InputStrategy, PointerSignal};
