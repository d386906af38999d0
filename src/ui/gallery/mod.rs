//! Project gallery filter: mobile (phone) or desktop (wide) projects.
//!
//! Switching views unmounts every visible card and mounts the other set.

mod intent;
mod reducer;
mod state;

pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::{GalleryState, GalleryView};
