//! State for a project card preview.

use crate::ui::mvi::UiState;

use super::strategy::InputStrategy;

/// Activation and buffering of the card's video, as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    /// Showing the image. `ready` survives deactivation.
    Idle { ready: bool },
    /// Active, waiting for the video to be able to play through.
    Buffering,
    /// Active and ready: the video is on screen.
    Playing,
    /// Active, but the play request was refused. The image stays up.
    Blocked { ready: bool },
}

impl Default for PreviewPhase {
    fn default() -> Self {
        PreviewPhase::Idle { ready: false }
    }
}

/// Whether the card has a video to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoAvailability {
    #[default]
    None,
    Declared,
    /// Declared, but loading failed. Never becomes ready.
    Failed,
}

/// What the card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewVisual {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewState {
    pub phase: PreviewPhase,
    pub video: VideoAvailability,
    /// Last visibility signal. Cards start visible until told otherwise.
    pub visible: bool,
    pub strategy: InputStrategy,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            phase: PreviewPhase::default(),
            video: VideoAvailability::None,
            visible: true,
            strategy: InputStrategy::default(),
        }
    }
}

impl UiState for PreviewState {}

impl PreviewState {
    pub fn new(has_video: bool, strategy: InputStrategy) -> Self {
        Self {
            video: if has_video {
                VideoAvailability::Declared
            } else {
                VideoAvailability::None
            },
            strategy,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, PreviewPhase::Idle { .. })
    }

    pub fn is_video_ready(&self) -> bool {
        match self.phase {
            PreviewPhase::Idle { ready } | PreviewPhase::Blocked { ready } => ready,
            PreviewPhase::Buffering => false,
            PreviewPhase::Playing => true,
        }
    }

    pub fn is_touch_device(&self) -> bool {
        self.strategy.is_touch()
    }

    /// A usable video source exists.
    pub fn has_video(&self) -> bool {
        self.video == VideoAvailability::Declared
    }

    /// Video only when it exists, the card is active and the video is ready.
    pub fn visual(&self) -> PreviewVisual {
        if self.has_video() && self.phase == PreviewPhase::Playing {
            PreviewVisual::Video
        } else {
            PreviewVisual::Image
        }
    }

    /// Touch devices get a play hint on inactive cards that have a video.
    pub fn shows_play_affordance(&self) -> bool {
        self.is_touch_device() && self.has_video() && !self.is_active()
    }
}
