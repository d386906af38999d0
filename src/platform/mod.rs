//! Primitives the page consumes from its host: one-shot timers, viewport
//! visibility, pointer capability and media elements.

pub mod capability;
pub mod media;
pub mod timer;
pub mod visibility;

pub use capability::{probe_touch_capability, InputMode};
pub use media::{FrameVideo, MediaElement, MediaError, PlaybackError};
pub use timer::{Fired, TimerGuard, TimerQueue, TimerToken};
pub use visibility::{intersection_ratio, Area, Observation, VisibilityObserver};
