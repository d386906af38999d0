//! Reducer for a project card preview.

use crate::ui::mvi::Reducer;

use super::intent::PreviewIntent;
use super::state::{PreviewPhase, PreviewState, VideoAvailability};
use super::strategy::Gesture;

/// Pure state transitions. Play, pause and seek requests are issued by
/// [`PreviewCard`](super::PreviewCard) around the dispatch call.
pub struct PreviewReducer;

impl Reducer for PreviewReducer {
    type State = PreviewState;
    type Intent = PreviewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PreviewIntent::Pointer(signal) => {
                match state.strategy.gesture(signal, state.is_active()) {
                    Some(Gesture::Activate) => activate(state),
                    Some(Gesture::Deactivate) => deactivate(state),
                    None => state,
                }
            }

            PreviewIntent::VisibilityChanged { visible } => {
                let state = PreviewState { visible, ..state };
                if visible {
                    state
                } else {
                    // Scrolled away: interrupt regardless of input mode
                    deactivate(state)
                }
            }

            PreviewIntent::VideoReady => {
                if !state.has_video() {
                    return state;
                }
                let phase = match state.phase {
                    PreviewPhase::Idle { .. } => PreviewPhase::Idle { ready: true },
                    PreviewPhase::Buffering | PreviewPhase::Playing => PreviewPhase::Playing,
                    PreviewPhase::Blocked { .. } => PreviewPhase::Blocked { ready: true },
                };
                PreviewState { phase, ..state }
            }

            PreviewIntent::VideoFailed => {
                if state.video != VideoAvailability::Declared {
                    return state;
                }
                let phase = match state.phase {
                    PreviewPhase::Idle { .. } => PreviewPhase::Idle { ready: false },
                    PreviewPhase::Buffering | PreviewPhase::Playing => PreviewPhase::Buffering,
                    PreviewPhase::Blocked { .. } => PreviewPhase::Blocked { ready: false },
                };
                PreviewState {
                    phase,
                    video: VideoAvailability::Failed,
                    ..state
                }
            }

            PreviewIntent::PlaybackRejected => {
                let ready = state.is_video_ready();
                match state.phase {
                    PreviewPhase::Buffering | PreviewPhase::Playing => PreviewState {
                        phase: PreviewPhase::Blocked { ready },
                        ..state
                    },
                    _ => state,
                }
            }
        }
    }
}

/// Start buffering or playing. Deliberately a no-op while the card is below
/// its visibility threshold: a card that is mostly off screen is never
/// started by hover or tap, matching the auto-pause that stops it there.
fn activate(state: PreviewState) -> PreviewState {
    if !state.visible {
        return state;
    }
    match state.phase {
        PreviewPhase::Idle { ready: true } => PreviewState {
            phase: PreviewPhase::Playing,
            ..state
        },
        PreviewPhase::Idle { ready: false } => PreviewState {
            phase: PreviewPhase::Buffering,
            ..state
        },
        _ => state,
    }
}

fn deactivate(state: PreviewState) -> PreviewState {
    let ready = state.is_video_ready();
    match state.phase {
        PreviewPhase::Idle { .. } => state,
        _ => PreviewState {
            phase: PreviewPhase::Idle { ready },
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::preview::strategy::{InputStrategy, PointerSignal};

    fn reduce(state: PreviewState, intent: PreviewIntent) -> PreviewState {
        PreviewReducer::reduce(state, intent)
    }

    fn hover_card() -> PreviewState {
        PreviewState::new(true, InputStrategy::HoverDriven)
    }

    #[test]
    fn enter_without_buffer_goes_to_buffering() {
        let state = reduce(hover_card(), PreviewIntent::Pointer(PointerSignal::Enter));
        assert_eq!(state.phase, PreviewPhase::Buffering);
    }

    #[test]
    fn ready_while_buffering_starts_playing() {
        let state = reduce(hover_card(), PreviewIntent::Pointer(PointerSignal::Enter));
        let state = reduce(state, PreviewIntent::VideoReady);
        assert_eq!(state.phase, PreviewPhase::Playing);
    }

    #[test]
    fn readiness_survives_deactivation() {
        let state = reduce(hover_card(), PreviewIntent::VideoReady);
        let state = reduce(state, PreviewIntent::Pointer(PointerSignal::Enter));
        assert_eq!(state.phase, PreviewPhase::Playing);
        let state = reduce(state, PreviewIntent::Pointer(PointerSignal::Leave));
        assert_eq!(state.phase, PreviewPhase::Idle { ready: true });
    }

    #[test]
    fn hidden_forces_inactive_and_keeps_readiness() {
        let state = reduce(hover_card(), PreviewIntent::VideoReady);
        let state = reduce(state, PreviewIntent::Pointer(PointerSignal::Enter));
        let state = reduce(state, PreviewIntent::VisibilityChanged { visible: false });
        assert!(!state.visible);
        assert_eq!(state.phase, PreviewPhase::Idle { ready: true });
    }

    #[test]
    fn hidden_card_ignores_activation() {
        let state = reduce(hover_card(), PreviewIntent::VisibilityChanged { visible: false });
        let state = reduce(state, PreviewIntent::Pointer(PointerSignal::Enter));
        assert!(!state.is_active());
    }

    #[test]
    fn becoming_visible_does_not_resume() {
        let state = reduce(hover_card(), PreviewIntent::VisibilityChanged { visible: false });
        let state = reduce(state, PreviewIntent::VisibilityChanged { visible: true });
        assert!(state.visible);
        assert!(!state.is_active());
    }

    #[test]
    fn ready_without_video_is_ignored() {
        let state = PreviewState::new(false, InputStrategy::HoverDriven);
        let state = reduce(state, PreviewIntent::VideoReady);
        assert!(!state.is_video_ready());
    }

    #[test]
    fn failure_clears_readiness_and_blocks_future_ready() {
        let state = reduce(hover_card(), PreviewIntent::Pointer(PointerSignal::Enter));
        let state = reduce(state, PreviewIntent::VideoFailed);
        assert_eq!(state.video, VideoAvailability::Failed);
        assert_eq!(state.phase, PreviewPhase::Buffering);
        let state = reduce(state, PreviewIntent::VideoReady);
        assert!(!state.is_video_ready());
    }

    #[test]
    fn rejection_blocks_active_card() {
        let state = reduce(hover_card(), PreviewIntent::VideoReady);
        let state = reduce(state, PreviewIntent::Pointer(PointerSignal::Enter));
        let state = reduce(state, PreviewIntent::PlaybackRejected);
        assert_eq!(state.phase, PreviewPhase::Blocked { ready: true });
        assert!(state.is_active());
    }

    #[test]
    fn rejection_on_idle_card_is_noop() {
        let state = reduce(hover_card(), PreviewIntent::PlaybackRejected);
        assert_eq!(state, hover_card());
    }

    #[test]
    fn ready_while_blocked_stays_blocked() {
        let state = reduce(hover_card(), PreviewIntent::Pointer(PointerSignal::Enter));
        let state = reduce(state, PreviewIntent::PlaybackRejected);
        let state = reduce(state, PreviewIntent::VideoReady);
        assert_eq!(state.phase, PreviewPhase::Blocked { ready: true });
    }
}
