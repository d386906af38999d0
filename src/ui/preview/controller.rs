//! Per-card preview controller.

use crate::config::Project;
use crate::platform::{MediaElement, Observation, TimerGuard, TimerToken};
use crate::ui::mvi::Reducer;

use super::intent::PreviewIntent;
use super::reducer::PreviewReducer;
use super::state::{PreviewState, PreviewVisual};
use super::strategy::{InputStrategy, PointerSignal};

/// One project card: its preview state, the media element it exclusively
/// owns, and the registrations that must be released when it unmounts.
pub struct PreviewCard<M> {
    project: Project,
    state: PreviewState,
    media: Option<M>,
    observation: Option<Observation>,
    buffering: Option<TimerGuard>,
    disposed: bool,
}

impl<M: MediaElement> PreviewCard<M> {
    /// Mount a card. `media` is `None` when the project has no video or its
    /// video failed to load; in the latter case the card starts out failed.
    pub fn mount(project: Project, media: Option<M>, is_touch_device: bool) -> Self {
        let declared = project.video_source().is_some();
        let strategy = InputStrategy::for_device(is_touch_device);
        let mut state = PreviewState::new(declared, strategy);
        if declared && media.is_none() {
            state = PreviewReducer::reduce(state, PreviewIntent::VideoFailed);
        }
        tracing::debug!(title = %project.title, ?strategy, has_video = state.has_video(), "Preview card mounted");

        Self {
            project,
            state,
            media,
            observation: None,
            buffering: None,
            disposed: false,
        }
    }

    /// Keep the card's visibility registration alive for its lifetime.
    pub fn attach_observation(&mut self, observation: Observation) {
        self.observation = Some(observation);
    }

    /// Keep the pending "can play through" timer alive for its lifetime.
    pub fn attach_buffering(&mut self, guard: TimerGuard) {
        self.buffering = Some(guard);
    }

    pub fn buffering_token(&self) -> Option<TimerToken> {
        self.buffering.as_ref().map(TimerGuard::token)
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.dispatch(PreviewIntent::Pointer(PointerSignal::Enter))
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.dispatch(PreviewIntent::Pointer(PointerSignal::Leave))
    }

    pub fn tap(&mut self) -> bool {
        self.dispatch(PreviewIntent::Pointer(PointerSignal::Tap))
    }

    pub fn visibility_changed(&mut self, visible: bool) -> bool {
        self.dispatch(PreviewIntent::VisibilityChanged { visible })
    }

    pub fn video_ready(&mut self) -> bool {
        self.buffering = None;
        self.dispatch(PreviewIntent::VideoReady)
    }

    pub fn video_failed(&mut self) -> bool {
        self.buffering = None;
        self.dispatch(PreviewIntent::VideoFailed)
    }

    /// Release the media element and registrations. Later signals are
    /// ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if self.state.is_active() {
            if let Some(media) = self.media.as_mut() {
                media.pause();
            }
        }
        self.state = PreviewReducer::reduce(
            self.state,
            PreviewIntent::VisibilityChanged { visible: false },
        );
        self.observation = None;
        self.buffering = None;
        self.disposed = true;
        tracing::debug!(title = %self.project.title, "Preview card disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_video_ready(&self) -> bool {
        self.state.is_video_ready()
    }

    pub fn is_touch_device(&self) -> bool {
        self.state.is_touch_device()
    }

    pub fn visual(&self) -> PreviewVisual {
        self.state.visual()
    }

    pub fn shows_play_affordance(&self) -> bool {
        self.state.shows_play_affordance()
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    fn dispatch(&mut self, intent: PreviewIntent) -> bool {
        if self.disposed {
            tracing::trace!(title = %self.project.title, ?intent, "Ignoring signal for disposed card");
            return false;
        }
        let before = self.state;
        PreviewReducer::dispatch(&mut self.state, intent);
        self.sync_media(before, intent);
        self.state != before
    }

    /// Issue media requests for an activation change. Best effort: a refused
    /// play request leaves the image up.
    fn sync_media(&mut self, before: PreviewState, intent: PreviewIntent) {
        let Some(media) = self.media.as_mut() else {
            return;
        };

        match (before.is_active(), self.state.is_active()) {
            (false, true) if self.state.has_video() => {
                if let Err(err) = media.play() {
                    tracing::debug!(title = %self.project.title, error = %err, "Play request refused, keeping image");
                    PreviewReducer::dispatch(&mut self.state, PreviewIntent::PlaybackRejected);
                }
            }
            (true, false) => {
                media.pause();
                // Scrolling away only interrupts; the user stopping rewinds.
                if matches!(intent, PreviewIntent::Pointer(_)) {
                    media.seek_to_start();
                }
            }
            _ => {}
        }
    }
}
