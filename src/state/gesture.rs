// Touch gesture interpretation: one finger drags, two or more pinch
use crate::state::transform::OverlayTransform;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    pub initial_distance: f64,
    pub initial_scale: f64,
}

/// What the tracker wants done to the transform. The tracker never applies
/// these itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    StartDrag,
    /// Absolute translate the overlay should move to.
    DragTo { x: f64, y: f64 },
    StartPinch,
    /// Unclamped target scale; the transform clamps it.
    PinchTo { scale: f64 },
    EndGesture,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureSession {
    pub mode: GestureMode,
    /// Pointer position minus translate at drag start.
    pub drag_anchor: Option<Point>,
    pub pinch_baseline: Option<PinchBaseline>,
}

impl GestureSession {
    pub fn start_drag(&mut self, pos: Point, current: &OverlayTransform) -> GestureIntent {
        self.mode = GestureMode::Dragging;
        self.pinch_baseline = None;
        self.drag_anchor = Some(Point::new(
            pos.x - current.translate_x,
            pos.y - current.translate_y,
        ));
        GestureIntent::StartDrag
    }

    pub fn drag_to(&self, pos: Point) -> Option<GestureIntent> {
        if self.mode != GestureMode::Dragging {
            return None;
        }
        let anchor = self.drag_anchor?;
        Some(GestureIntent::DragTo {
            x: pos.x - anchor.x,
            y: pos.y - anchor.y,
        })
    }

    /// Two fingers always win: any drag in progress is dropped and the zoom
    /// baseline is re-latched from the current scale.
    pub fn start_pinch(&mut self, p1: Point, p2: Point, current: &OverlayTransform) -> GestureIntent {
        self.mode = GestureMode::Pinching;
        self.drag_anchor = None;
        self.pinch_baseline = Some(PinchBaseline {
            initial_distance: distance(p1, p2),
            initial_scale: current.scale,
        });
        GestureIntent::StartPinch
    }

    pub fn pinch_to(&self, p1: Point, p2: Point) -> Option<GestureIntent> {
        if self.mode != GestureMode::Pinching {
            return None;
        }
        let base = self.pinch_baseline?;
        if base.initial_distance <= 0.0 {
            return None;
        }
        let factor = distance(p1, p2) / base.initial_distance;
        Some(GestureIntent::PinchTo {
            scale: base.initial_scale * factor,
        })
    }

    pub fn end_gesture(&mut self) -> GestureIntent {
        *self = GestureSession::default();
        GestureIntent::EndGesture
    }

    /// Contact set grew (touchstart). Only the first two points matter.
    pub fn touches_started(
        &mut self,
        touches: &[Point],
        current: &OverlayTransform,
    ) -> Option<GestureIntent> {
        match touches {
            [] => None,
            [p] => Some(self.start_drag(*p, current)),
            [p1, p2, ..] => Some(self.start_pinch(*p1, *p2, current)),
        }
    }

    pub fn touches_moved(&self, touches: &[Point]) -> Option<GestureIntent> {
        match touches {
            [] => None,
            [p] => self.drag_to(*p),
            [p1, p2, ..] => self.pinch_to(*p1, *p2),
        }
    }

    /// Contact set shrank (touchend/touchcancel); `remaining` is what is
    /// still down. A pinch that keeps two or more fingers re-latches on the
    /// new leading pair.
    pub fn touches_ended(
        &mut self,
        remaining: &[Point],
        current: &OverlayTransform,
    ) -> Option<GestureIntent> {
        match remaining {
            [] => Some(self.end_gesture()),
            [_] => {
                self.pinch_baseline = None;
                None
            }
            [p1, p2, ..] => {
                if self.mode == GestureMode::Pinching {
                    self.start_pinch(*p1, *p2, current);
                }
                None
            }
        }
    }
}
