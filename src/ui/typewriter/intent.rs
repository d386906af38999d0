//! Intents for the typing effect.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterIntent {
    /// The delay returned by `next_delay` has elapsed.
    Tick,
}

impl Intent for TypewriterIntent {}
