//! The overlay widget: one owned object per AR view holding the transform,
//! the gallery, the live gesture session and the grid/flash controls.
//! Components drive it through `OverlayAction` via `use_reducer`.

use std::rc::Rc;
use yew::Reducible;

use crate::state::transform::{DEFAULT_OPACITY, TEMPLATE_OPACITY};
use crate::state::{
    FlashState, Gallery, GalleryImage, GestureIntent, GestureSession, GridOverlay, ImageHandle,
    ImageSource, OverlayTransform, Point, TransformState,
};

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayWidget {
    pub transform: TransformState,
    pub gallery: Gallery,
    pub gesture: GestureSession,
    pub grid: GridOverlay,
    pub flash: FlashState,
    /// Opacity the user chose with the slider. This is what gets persisted;
    /// a template's opacity only affects the displayed transform.
    pub user_opacity: f64,
    /// Bumped on every change so effects can key on it.
    pub version: u64,
}

impl Default for OverlayWidget {
    fn default() -> Self {
        Self {
            transform: TransformState::default(),
            gallery: Gallery::default(),
            gesture: GestureSession::default(),
            grid: GridOverlay::default(),
            flash: FlashState::default(),
            user_opacity: DEFAULT_OPACITY,
            version: 0,
        }
    }
}

impl OverlayWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_opacity(&mut self, v: f64) {
        self.transform.set_opacity(v);
        self.user_opacity = self.transform.transform().opacity;
    }

    pub fn current(&self) -> &OverlayTransform {
        self.transform.transform()
    }

    /// The image currently shown, if any.
    pub fn displayed(&self) -> Option<&GalleryImage> {
        self.transform.bound().and_then(|h| self.gallery.get(h))
    }

    pub fn add_image(&mut self, source: ImageSource) -> ImageHandle {
        self.gallery.add_image(source, &mut self.transform)
    }

    pub fn activate(&mut self, handle: ImageHandle) -> bool {
        self.gallery.activate(handle, &mut self.transform)
    }

    /// A template always ends up displayed, at template opacity.
    pub fn add_template(&mut self, source: ImageSource) -> ImageHandle {
        let handle = self.add_image(source);
        self.activate(handle);
        self.transform.set_opacity(TEMPLATE_OPACITY);
        handle
    }

    pub fn hide(&mut self) {
        self.gallery.deactivate(&mut self.transform);
        self.gesture.end_gesture();
    }

    pub fn clear_all(&mut self) {
        self.gallery.clear_all(&mut self.transform);
        self.gesture.end_gesture();
    }

    pub fn load_remote(&mut self, sources: Vec<ImageSource>) -> Vec<ImageHandle> {
        self.gallery.load_remote(sources)
    }

    pub fn apply_intent(&mut self, intent: GestureIntent) {
        match intent {
            GestureIntent::DragTo { x, y } => self.transform.translate_by(x, y),
            GestureIntent::PinchTo { scale } => self.transform.set_scale(scale),
            GestureIntent::StartDrag | GestureIntent::StartPinch | GestureIntent::EndGesture => {}
        }
    }

    pub fn touch_start(&mut self, touches: &[Point]) {
        if self.transform.bound().is_none() {
            return;
        }
        let current = *self.transform.transform();
        if let Some(intent) = self.gesture.touches_started(touches, &current) {
            self.apply_intent(intent);
        }
    }

    pub fn touch_move(&mut self, touches: &[Point]) {
        if let Some(intent) = self.gesture.touches_moved(touches) {
            self.apply_intent(intent);
        }
    }

    pub fn touch_end(&mut self, remaining: &[Point]) {
        let current = *self.transform.transform();
        if let Some(intent) = self.gesture.touches_ended(remaining, &current) {
            self.apply_intent(intent);
        }
    }
}

pub enum OverlayAction {
    AddImage(ImageSource),
    AddTemplate(ImageSource),
    LoadRemote(Vec<ImageSource>),
    Activate(ImageHandle),
    Hide,
    ClearAll,
    SetOpacity(f64),
    SetScale(f64),
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd(Vec<Point>),
    SelectGridSize(u32),
    ToggleGrid,
    SetFlash(FlashState),
}

impl Reducible for OverlayWidget {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use OverlayAction::*;
        let mut new = (*self).clone();
        match action {
            AddImage(src) => {
                new.add_image(src);
            }
            AddTemplate(src) => {
                new.add_template(src);
            }
            LoadRemote(list) => {
                if list.is_empty() {
                    return self;
                }
                new.load_remote(list);
            }
            Activate(handle) => {
                if !new.activate(handle) {
                    return self;
                }
            }
            Hide => new.hide(),
            ClearAll => new.clear_all(),
            SetOpacity(v) => new.set_opacity(v),
            SetScale(v) => new.transform.set_scale(v),
            TouchStart(pts) => new.touch_start(&pts),
            TouchMove(pts) => new.touch_move(&pts),
            TouchEnd(pts) => new.touch_end(&pts),
            SelectGridSize(n) => new.grid.select_size(n),
            ToggleGrid => new.grid.toggle(),
            SetFlash(state) => new.flash = state,
        }
        if new == *self {
            return self;
        }
        new.version = self.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GestureMode;

    fn img(tag: &str) -> ImageSource {
        ImageSource::parse(&format!("data:image/png;base64,{tag}")).unwrap()
    }

    fn reduce(w: Rc<OverlayWidget>, a: OverlayAction) -> Rc<OverlayWidget> {
        w.reduce(a)
    }

    fn pinch(w: &mut OverlayWidget, from: f64, to: f64) {
        w.touch_start(&[Point::new(0.0, 0.0), Point::new(from, 0.0)]);
        w.touch_move(&[Point::new(0.0, 0.0), Point::new(to, 0.0)]);
        w.touch_end(&[]);
    }

    #[test]
    fn gallery_swap_scenario() {
        let mut w = OverlayWidget::new();
        let a = w.add_image(img("A"));
        assert_eq!(w.displayed().map(|i| i.id), Some(a));
        assert_eq!(w.current().scale, 1.0);

        w.transform.set_opacity(0.3);
        w.touch_start(&[Point::new(10.0, 10.0)]);
        w.touch_move(&[Point::new(60.0, 10.0)]);
        w.touch_end(&[]);
        pinch(&mut w, 100.0, 150.0);
        assert_eq!(w.current().translate_x, 50.0);
        assert_eq!(w.current().scale, 1.5);

        let b = w.add_image(img("B"));
        assert_eq!(w.displayed().map(|i| i.id), Some(a));

        assert!(w.activate(b));
        let t = w.current();
        assert_eq!((t.translate_x, t.translate_y, t.scale), (0.0, 0.0, 1.0));
        assert_eq!(t.opacity, 0.3);
        assert_eq!(w.displayed().map(|i| i.id), Some(b));
    }

    #[test]
    fn repeated_pinches_compose_from_current_scale() {
        let mut w = OverlayWidget::new();
        w.add_image(img("A"));
        pinch(&mut w, 100.0, 150.0);
        assert_eq!(w.current().scale, 1.5);
        pinch(&mut w, 100.0, 50.0);
        assert_eq!(w.current().scale, 0.75);
    }

    #[test]
    fn pinch_floor_is_applied() {
        let mut w = OverlayWidget::new();
        w.add_image(img("A"));
        w.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        w.touch_move(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
        assert_eq!(w.current().scale, 2.0);
        w.touch_move(&[Point::new(0.0, 0.0), Point::new(20.0, 0.0)]);
        assert_eq!(w.current().scale, 0.2);
        w.touch_move(&[Point::new(0.0, 0.0), Point::new(1000.0, 0.0)]);
        assert_eq!(w.current().scale, 3.0);
    }

    #[test]
    fn gestures_need_a_displayed_image() {
        let mut w = OverlayWidget::new();
        w.touch_start(&[Point::new(5.0, 5.0)]);
        assert_eq!(w.gesture.mode, GestureMode::Idle);
        w.touch_move(&[Point::new(50.0, 50.0)]);
        assert_eq!(w.current().translate_x, 0.0);
    }

    #[test]
    fn template_is_shown_at_template_opacity() {
        let mut w = OverlayWidget::new();
        w.add_image(img("A"));
        let t = w.add_template(ImageSource::parse("/static/templates/kitchen.png").unwrap());
        assert_eq!(w.displayed().map(|i| i.id), Some(t));
        assert_eq!(w.current().opacity, TEMPLATE_OPACITY);
    }

    #[test]
    fn template_opacity_does_not_replace_user_choice() {
        let mut w = OverlayWidget::new();
        assert_eq!(w.user_opacity, DEFAULT_OPACITY);
        w.set_opacity(0.4);
        w.add_template(ImageSource::parse("/static/templates/kitchen.png").unwrap());
        assert_eq!(w.current().opacity, TEMPLATE_OPACITY);
        assert_eq!(w.user_opacity, 0.4);

        let w = reduce(Rc::new(w), OverlayAction::SetOpacity(1.5));
        assert_eq!(w.current().opacity, 1.0);
        assert_eq!(w.user_opacity, 1.0);
    }

    #[test]
    fn three_to_two_fingers_keeps_scale() {
        let mut w = OverlayWidget::new();
        w.add_image(img("A"));
        let (a, b, c) = (
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(0.0, 300.0),
        );
        w.touch_start(&[a, b]);
        w.touch_start(&[a, b, c]);
        w.touch_end(&[b, c]);
        w.touch_move(&[b, c]);
        assert_eq!(w.current().scale, 1.0);
    }

    #[test]
    fn hide_keeps_gallery_clear_all_drops_it() {
        let mut w = OverlayWidget::new();
        w.add_image(img("A"));
        w.add_image(img("B"));
        w.hide();
        assert!(w.displayed().is_none());
        assert_eq!(w.gallery.len(), 2);
        w.clear_all();
        assert!(w.gallery.is_empty());
        assert!(w.displayed().is_none());
    }

    #[test]
    fn reducer_skips_noops_and_bumps_version() {
        let w = Rc::new(OverlayWidget::new());
        let same = reduce(w.clone(), OverlayAction::Activate(ImageHandle(42)));
        assert!(Rc::ptr_eq(&w, &same));
        let same = reduce(w.clone(), OverlayAction::LoadRemote(Vec::new()));
        assert!(Rc::ptr_eq(&w, &same));

        let w2 = reduce(w.clone(), OverlayAction::AddImage(img("A")));
        assert_eq!(w2.version, 1);
        let w3 = reduce(w2.clone(), OverlayAction::SetOpacity(4.0));
        assert_eq!(w3.current().opacity, 1.0);
        assert_eq!(w3.version, 2);
        let w4 = reduce(w3.clone(), OverlayAction::SetOpacity(1.0));
        assert!(Rc::ptr_eq(&w3, &w4));
    }

    #[test]
    fn reducer_routes_touches() {
        let mut w = Rc::new(OverlayWidget::new());
        w = reduce(w, OverlayAction::AddImage(img("A")));
        w = reduce(w, OverlayAction::TouchStart(vec![Point::new(50.0, 50.0)]));
        w = reduce(w, OverlayAction::TouchMove(vec![Point::new(80.0, 90.0)]));
        assert_eq!((w.current().translate_x, w.current().translate_y), (30.0, 40.0));
        w = reduce(w, OverlayAction::TouchEnd(Vec::new()));
        assert_eq!(w.gesture, GestureSession::default());
    }
}
