//! Pointer capability detection.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`probe_touch_capability`].
pub const INPUT_ENV: &str = "FOLIO_INPUT";

/// How preview cards should be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Ask [`probe_touch_capability`].
    #[default]
    Auto,
    Touch,
    Pointer,
}

impl InputMode {
    /// Decide once whether this session behaves like a touch device.
    pub fn is_touch(self) -> bool {
        match self {
            InputMode::Auto => probe_touch_capability(),
            InputMode::Touch => true,
            InputMode::Pointer => false,
        }
    }
}

/// Terminals do not report touch input, so the capability comes from
/// `FOLIO_INPUT` (`touch` or `pointer`). Anything else means pointer.
pub fn probe_touch_capability() -> bool {
    parse_input_hint(std::env::var(INPUT_ENV).ok().as_deref()).unwrap_or(false)
}

pub fn parse_input_hint(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "touch" | "tap" | "1" | "true" => Some(true),
        "pointer" | "mouse" | "hover" | "0" | "false" => Some(false),
        _ => None,
    }
}
