//! Intents for a project card preview.

use crate::ui::mvi::Intent;

use super::strategy::PointerSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewIntent {
    /// Pointer enter/leave or tap on the card surface. Interpreted by the
    /// card's input strategy.
    Pointer(PointerSignal),

    /// The card crossed the visibility threshold.
    VisibilityChanged { visible: bool },

    /// The video has buffered enough to play through.
    VideoReady,

    /// The video failed to load. The image stays up for good.
    VideoFailed,

    /// The media element refused a play request.
    PlaybackRejected,
}

impl Intent for PreviewIntent {}
