//! State for the hero typing effect.

use crate::config::TypewriterConfig;
use crate::ui::mvi::UiState;
use std::sync::Arc;
use std::time::Duration;

/// Whether characters are being added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingMode {
    #[default]
    Typing,
    Deleting,
}

/// Shortest delay between two ticks. A zero delay would refire within the
/// same clock step and never let the timer loop return.
pub const MIN_TICK: Duration = Duration::from_millis(1);

/// Delays between typewriter steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    /// Hold time once a phrase is fully typed.
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from(&TypewriterConfig::default())
    }
}

impl From<&TypewriterConfig> for TypewriterTiming {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            typing_speed: config.typing_speed(),
            deleting_speed: config.deleting_speed(),
            pause: config.pause(),
        }
    }
}

/// Phrase cycling state.
///
/// `display_text` is always the first `typed` characters of the phrase at
/// `phrase_index`. A state in `Deleting` mode with nothing left to delete
/// never survives a transition; the reducer moves straight on to typing the
/// next phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterState {
    phrases: Arc<[String]>,
    phrase_index: usize,
    /// Number of characters (not bytes) of the current phrase on display.
    typed: usize,
    mode: TypingMode,
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl UiState for TypewriterState {}

impl TypewriterState {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases: Arc::from(phrases),
            phrase_index: 0,
            typed: 0,
            mode: TypingMode::Typing,
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    /// No phrases to cycle through; the display stays empty.
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn current_phrase(&self) -> Option<&str> {
        self.phrases.get(self.phrase_index).map(String::as_str)
    }

    pub fn display_text(&self) -> &str {
        let Some(phrase) = self.current_phrase() else {
            return "";
        };
        match phrase.char_indices().nth(self.typed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Every character of the current phrase is on display.
    pub fn is_phrase_complete(&self) -> bool {
        self.current_phrase()
            .is_some_and(|phrase| self.typed >= phrase.chars().count())
    }

    /// Delay before the next tick should fire, or `None` when there is
    /// nothing to animate. Never shorter than [`MIN_TICK`].
    pub fn next_delay(&self, timing: &TypewriterTiming) -> Option<Duration> {
        if self.is_idle() {
            return None;
        }
        let delay = match self.mode {
            TypingMode::Typing if self.is_phrase_complete() => timing.pause,
            TypingMode::Typing => timing.typing_speed,
            TypingMode::Deleting => timing.deleting_speed,
        };
        Some(delay.max(MIN_TICK))
    }

    pub(super) fn type_char(self) -> Self {
        Self {
            typed: self.typed + 1,
            ..self
        }
    }

    pub(super) fn delete_char(self) -> Self {
        Self {
            typed: self.typed.saturating_sub(1),
            ..self
        }
    }

    pub(super) fn start_deleting(self) -> Self {
        Self {
            mode: TypingMode::Deleting,
            ..self
        }
    }

    /// Resolve the empty `Deleting` state: advance to the next phrase and
    /// start typing it.
    pub(super) fn settle(self) -> Self {
        if self.mode == TypingMode::Deleting && self.typed == 0 && !self.phrases.is_empty() {
            let phrase_index = (self.phrase_index + 1) % self.phrases.len();
            return Self {
                phrase_index,
                mode: TypingMode::Typing,
                ..self
            };
        }
        self
    }

    pub(super) fn typed(&self) -> usize {
        self.typed
    }
}
