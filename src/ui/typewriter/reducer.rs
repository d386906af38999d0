//! Reducer for the typing effect.

use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::state::{TypewriterState, TypingMode};

/// One transition per tick:
/// - typing, phrase incomplete: show one more character
/// - typing, phrase complete (the pause has elapsed): switch to deleting
/// - deleting: remove one character; once empty, move to the next phrase
///   and start typing at once
pub struct TypewriterReducer;

impl Reducer for TypewriterReducer {
    type State = TypewriterState;
    type Intent = TypewriterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypewriterIntent::Tick => {
                if state.is_idle() {
                    return state;
                }
                match state.mode() {
                    TypingMode::Typing if state.is_phrase_complete() => {
                        state.start_deleting().settle()
                    }
                    TypingMode::Typing => state.type_char(),
                    TypingMode::Deleting if state.typed() > 0 => state.delete_char().settle(),
                    TypingMode::Deleting => state.settle(),
                }
            }
        }
    }
}
