// Overlay transform: position, scale and opacity of the displayed image
use crate::state::gallery::ImageHandle;
use crate::util::css_num;

pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 3.0;
pub const DEFAULT_OPACITY: f64 = 0.5;
/// Opacity applied when a template image is opened.
pub const TEMPLATE_OPACITY: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayTransform {
    /// Pixel offset from the centered anchor.
    pub translate_x: f64,
    pub translate_y: f64,
    /// Always within `MIN_SCALE..=MAX_SCALE`.
    pub scale: f64,
    /// Always within `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for OverlayTransform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl OverlayTransform {
    /// Centering anchor first, then the scale about that point. The drag
    /// offset lives in `left`/`top` (see `style`), not in this transform.
    pub fn css_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", css_num(self.scale))
    }

    pub fn style(&self) -> String {
        format!(
            "left:calc(50% + {}px); top:calc(50% + {}px); transform:{}; opacity:{};",
            css_num(self.translate_x),
            css_num(self.translate_y),
            self.css_transform(),
            css_num(self.opacity)
        )
    }
}

pub fn clamp_scale(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(MIN_SCALE, MAX_SCALE)
}

pub fn clamp_opacity(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_OPACITY;
    }
    value.clamp(0.0, 1.0)
}

/// Authoritative transform for whatever image is currently bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformState {
    transform: OverlayTransform,
    bound: Option<ImageHandle>,
}

impl TransformState {
    pub fn transform(&self) -> &OverlayTransform {
        &self.transform
    }

    pub fn bound(&self) -> Option<ImageHandle> {
        self.bound
    }

    pub fn set_opacity(&mut self, value: f64) {
        self.transform.opacity = clamp_opacity(value);
    }

    pub fn set_scale(&mut self, value: f64) {
        self.transform.scale = clamp_scale(value);
    }

    /// Absolute offset computed by the gesture tracker, not a delta.
    pub fn translate_by(&mut self, x: f64, y: f64) {
        self.transform.translate_x = x;
        self.transform.translate_y = y;
    }

    /// Back to centered and unscaled. Opacity is a separate control and survives.
    pub fn reset(&mut self) {
        self.transform.translate_x = 0.0;
        self.transform.translate_y = 0.0;
        self.transform.scale = 1.0;
    }

    pub fn bind_image(&mut self, handle: Option<ImageHandle>) {
        self.bound = handle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_clamped_and_idempotent() {
        let mut ts = TransformState::default();
        for s in [-4.0, 0.0, 0.1, 0.2, 1.0, 2.99, 3.0, 7.5, f64::INFINITY] {
            ts.set_scale(s);
            let once = ts.transform().scale;
            assert_eq!(once, s.clamp(MIN_SCALE, MAX_SCALE));
            ts.set_scale(once);
            assert_eq!(ts.transform().scale, once);
        }
    }

    #[test]
    fn opacity_is_clamped() {
        let mut ts = TransformState::default();
        ts.set_opacity(1.7);
        assert_eq!(ts.transform().opacity, 1.0);
        ts.set_opacity(-0.3);
        assert_eq!(ts.transform().opacity, 0.0);
        ts.set_opacity(0.35);
        assert_eq!(ts.transform().opacity, 0.35);
        ts.set_opacity(f64::NAN);
        assert_eq!(ts.transform().opacity, DEFAULT_OPACITY);
    }

    #[test]
    fn reset_keeps_opacity() {
        let mut ts = TransformState::default();
        ts.set_opacity(0.8);
        ts.set_scale(2.5);
        ts.translate_by(12.0, -40.0);
        ts.reset();
        let t = ts.transform();
        assert_eq!((t.translate_x, t.translate_y, t.scale), (0.0, 0.0, 1.0));
        assert_eq!(t.opacity, 0.8);
    }

    #[test]
    fn translate_is_absolute() {
        let mut ts = TransformState::default();
        ts.translate_by(10.0, 10.0);
        ts.translate_by(30.0, 40.0);
        assert_eq!(ts.transform().translate_x, 30.0);
        assert_eq!(ts.transform().translate_y, 40.0);
    }

    #[test]
    fn style_keeps_centering_anchor() {
        let t = OverlayTransform {
            translate_x: 30.0,
            translate_y: -12.5,
            scale: 1.5,
            opacity: 0.7,
        };
        assert_eq!(t.css_transform(), "translate(-50%, -50%) scale(1.5)");
        assert_eq!(
            t.style(),
            "left:calc(50% + 30px); top:calc(50% + -12.5px); transform:translate(-50%, -50%) scale(1.5); opacity:0.7;"
        );
    }
}
