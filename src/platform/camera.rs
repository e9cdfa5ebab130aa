//! Rear-camera stream and its torch.
//!
//! Torch support is probed once, right after the stream starts, and decides
//! which `CameraSource` variant the view holds for the rest of its life.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack, MediaTrackConstraints};

use crate::error::OverlayError;
use crate::util::clog;

pub enum CameraSource {
    TorchCapable {
        stream: MediaStream,
        track: MediaStreamTrack,
    },
    TorchUnsupported {
        stream: MediaStream,
    },
}

impl CameraSource {
    /// Asks for the environment-facing camera.
    pub async fn acquire() -> Result<Self, OverlayError> {
        let window = web_sys::window().ok_or(OverlayError::CaptureUnavailable)?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| OverlayError::CaptureUnavailable)?;

        let facing = Object::new();
        Reflect::set(&facing, &"ideal".into(), &"environment".into()).map_err(OverlayError::from_js)?;
        let video = Object::new();
        Reflect::set(&video, &"facingMode".into(), &facing).map_err(OverlayError::from_js)?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(OverlayError::from_js)?;
        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(OverlayError::from_js)?
            .dyn_into()
            .map_err(|_| OverlayError::CaptureUnavailable)?;

        let track = stream
            .get_video_tracks()
            .get(0)
            .dyn_into::<MediaStreamTrack>()
            .map_err(|_| OverlayError::CaptureUnavailable)?;
        if torch_capable(&track) {
            clog("camera started (torch available)");
            Ok(CameraSource::TorchCapable { stream, track })
        } else {
            clog("camera started (no torch)");
            Ok(CameraSource::TorchUnsupported { stream })
        }
    }

    pub fn stream(&self) -> &MediaStream {
        match self {
            CameraSource::TorchCapable { stream, .. } | CameraSource::TorchUnsupported { stream } => {
                stream
            }
        }
    }

    pub fn supports_torch(&self) -> bool {
        matches!(self, CameraSource::TorchCapable { .. })
    }

    /// Returns the torch state now in effect.
    pub async fn set_torch(&self, on: bool) -> Result<bool, OverlayError> {
        let CameraSource::TorchCapable { track, .. } = self else {
            return Err(OverlayError::CapabilityUnsupported);
        };
        let wanted = Object::new();
        Reflect::set(&wanted, &"torch".into(), &JsValue::from_bool(on)).map_err(OverlayError::from_js)?;
        let constraints = MediaTrackConstraints::new();
        Reflect::set(&constraints, &"advanced".into(), &Array::of1(&wanted))
            .map_err(OverlayError::from_js)?;
        let promise = track
            .apply_constraints_with_constraints(&constraints)
            .map_err(OverlayError::from_js)?;
        JsFuture::from(promise).await.map_err(OverlayError::from_js)?;
        clog(if on { "torch on" } else { "torch off" });
        Ok(on)
    }

    pub fn stop(&self) {
        for t in self.stream().get_tracks().iter() {
            if let Ok(track) = t.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

fn torch_capable(track: &MediaStreamTrack) -> bool {
    let Ok(get_caps) = Reflect::get(track, &"getCapabilities".into()) else {
        return false;
    };
    let Ok(get_caps) = get_caps.dyn_into::<Function>() else {
        return false;
    };
    get_caps
        .call0(track)
        .ok()
        .and_then(|caps| Reflect::get(&caps, &"torch".into()).ok())
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}
