use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong at the edges of the overlay widget. None of
/// these are fatal: callers degrade to "feature unavailable".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    #[error("camera unavailable")]
    CaptureUnavailable,
    #[error("flashlight not supported on this camera")]
    CapabilityUnsupported,
    #[error("could not read image: {0}")]
    DecodeFailed(String),
    #[error("project service: {0}")]
    Persistence(String),
    #[error("browser error: {0}")]
    Platform(String),
}

impl OverlayError {
    /// Wrap a rejected promise or thrown JS value.
    pub fn from_js(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        OverlayError::Platform(msg)
    }
}
