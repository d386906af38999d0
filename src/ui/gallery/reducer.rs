use crate::ui::mvi::Reducer;

use super::intent::GalleryIntent;
use super::state::GalleryState;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::ToggleView => GalleryState {
                view: state.view.toggled(),
            },
            GalleryIntent::Show(view) => GalleryState { view },
        }
    }
}
