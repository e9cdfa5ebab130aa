// Flashlight control state, separate from the camera handle that drives it
use crate::error::OverlayError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashState {
    /// Camera not started yet or torch never queried.
    #[default]
    Unknown,
    Off,
    On,
    Unsupported,
    Failed,
}

impl FlashState {
    /// Once unsupported, the control stays disabled.
    pub fn is_enabled(self) -> bool {
        !matches!(self, FlashState::Unsupported)
    }

    pub fn is_on(self) -> bool {
        matches!(self, FlashState::On)
    }

    /// Torch setting to request on the next press.
    pub fn wanted(self) -> bool {
        !self.is_on()
    }

    pub fn after_toggle(self, result: Result<bool, OverlayError>) -> FlashState {
        match result {
            Ok(true) => FlashState::On,
            Ok(false) => FlashState::Off,
            Err(OverlayError::CapabilityUnsupported) | Err(OverlayError::CaptureUnavailable) => {
                FlashState::Unsupported
            }
            Err(_) => match self {
                FlashState::Unsupported => FlashState::Unsupported,
                _ => FlashState::Failed,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlashState::Unknown | FlashState::Off => "FLASH OFF",
            FlashState::On => "FLASH ON",
            FlashState::Unsupported => "Not Supported",
            FlashState::Failed => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_on_and_off() {
        let s = FlashState::Unknown;
        assert!(s.wanted());
        let s = s.after_toggle(Ok(true));
        assert_eq!(s, FlashState::On);
        assert!(!s.wanted());
        assert_eq!(s.after_toggle(Ok(false)), FlashState::Off);
    }

    #[test]
    fn missing_torch_disables_control() {
        let s = FlashState::Off.after_toggle(Err(OverlayError::CapabilityUnsupported));
        assert_eq!(s, FlashState::Unsupported);
        assert!(!s.is_enabled());
        assert_eq!(s.label(), "Not Supported");
    }

    #[test]
    fn apply_failure_reports_error_but_stays_usable() {
        let s = FlashState::On.after_toggle(Err(OverlayError::Platform("NotReadableError".into())));
        assert_eq!(s, FlashState::Failed);
        assert!(s.is_enabled());
        assert!(s.wanted());
    }
}
