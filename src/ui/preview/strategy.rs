//! Input strategy for a preview card, chosen once per card.

/// Raw pointer signal from the card's interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSignal {
    Enter,
    Leave,
    Tap,
}

/// What a pointer signal means for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Activate,
    Deactivate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStrategy {
    /// Pointer devices: enter activates, leave deactivates, taps ignored.
    #[default]
    HoverDriven,
    /// Touch devices: each tap toggles, enter/leave ignored.
    TapDriven,
}

impl InputStrategy {
    pub fn for_device(is_touch_device: bool) -> Self {
        if is_touch_device {
            Self::TapDriven
        } else {
            Self::HoverDriven
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, Self::TapDriven)
    }

    /// Interpret `signal` given whether the card is currently active.
    pub fn gesture(self, signal: PointerSignal, is_active: bool) -> Option<Gesture> {
        match (self, signal) {
            (Self::HoverDriven, PointerSignal::Enter) => Some(Gesture::Activate),
            (Self::HoverDriven, PointerSignal::Leave) => Some(Gesture::Deactivate),
            (Self::TapDriven, PointerSignal::Tap) if is_active => Some(Gesture::Deactivate),
            (Self::TapDriven, PointerSignal::Tap) => Some(Gesture::Activate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_maps_enter_and_leave_ignores_tap() {
        let hover = InputStrategy::HoverDriven;
        assert_eq!(hover.gesture(PointerSignal::Enter, false), Some(Gesture::Activate));
        assert_eq!(hover.gesture(PointerSignal::Leave, true), Some(Gesture::Deactivate));
        assert_eq!(hover.gesture(PointerSignal::Tap, false), None);
        assert_eq!(hover.gesture(PointerSignal::Tap, true), None);
    }

    #[test]
    fn tap_toggles_and_ignores_hover() {
        let tap = InputStrategy::TapDriven;
        assert_eq!(tap.gesture(PointerSignal::Tap, false), Some(Gesture::Activate));
        assert_eq!(tap.gesture(PointerSignal::Tap, true), Some(Gesture::Deactivate));
        assert_eq!(tap.gesture(PointerSignal::Enter, false), None);
        assert_eq!(tap.gesture(PointerSignal::Leave, true), None);
    }

    #[test]
    fn device_selects_strategy() {
        assert_eq!(InputStrategy::for_device(true), InputStrategy::TapDriven);
        assert_eq!(InputStrategy::for_device(false), InputStrategy::HoverDriven);
        assert!(InputStrategy::TapDriven.is_touch());
    }
}
