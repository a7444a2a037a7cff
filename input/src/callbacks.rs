//! The gesture callbacks a consumer registers with a [`Recognizer`](crate::Recognizer).

use std::fmt;

use tactile_geometry::Point;

use crate::{Contact, contact::pair_coordinates};

pub type Handler = Box<dyn FnMut()>;
/// Receives `x, y`.
pub type PointHandler = Box<dyn FnMut(f64, f64)>;
/// Receives `start_x, start_y, end_x, end_y`.
pub type DragHandler = Box<dyn FnMut(f64, f64, f64, f64)>;
/// Receives `[s1x, s1y, s2x, s2y]` and `[e1x, e1y, e2x, e2y]`.
pub type PinchHandler = Box<dyn FnMut([f64; 4], [f64; 4])>;

/// A set of optional gesture handlers.
///
/// Every handler can be left out. The recognizer's transitions do not depend on which ones are
/// registered, except for the double tap handler: Without it, a second tap is not detected.
#[derive(Default)]
pub struct GestureCallbacks {
    pub(crate) init: Option<Box<dyn FnOnce()>>,
    touch_start: Option<Handler>,
    touch_end: Option<Handler>,
    drag_start: Option<Handler>,
    drag_move: Option<DragHandler>,
    drag_end: Option<DragHandler>,
    single_tap: Option<PointHandler>,
    double_tap: Option<PointHandler>,
    pinch_start: Option<Handler>,
    pinch_move: Option<PinchHandler>,
    pinch_end: Option<PinchHandler>,
}

impl GestureCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once before the very first touch start is reported.
    pub fn on_init(mut self, f: impl FnOnce() + 'static) -> Self {
        self.init = Some(Box::new(f));
        self
    }

    pub fn on_touch_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.touch_start = Some(Box::new(f));
        self
    }

    pub fn on_touch_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.touch_end = Some(Box::new(f));
        self
    }

    pub fn on_drag_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.drag_start = Some(Box::new(f));
        self
    }

    pub fn on_drag_move(mut self, f: impl FnMut(f64, f64, f64, f64) + 'static) -> Self {
        self.drag_move = Some(Box::new(f));
        self
    }

    pub fn on_drag_end(mut self, f: impl FnMut(f64, f64, f64, f64) + 'static) -> Self {
        self.drag_end = Some(Box::new(f));
        self
    }

    pub fn on_single_tap(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.single_tap = Some(Box::new(f));
        self
    }

    pub fn on_double_tap(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.double_tap = Some(Box::new(f));
        self
    }

    pub fn on_pinch_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.pinch_start = Some(Box::new(f));
        self
    }

    pub fn on_pinch_move(mut self, f: impl FnMut([f64; 4], [f64; 4]) + 'static) -> Self {
        self.pinch_move = Some(Box::new(f));
        self
    }

    pub fn on_pinch_end(mut self, f: impl FnMut([f64; 4], [f64; 4]) + 'static) -> Self {
        self.pinch_end = Some(Box::new(f));
        self
    }

    pub(crate) fn detects_double_taps(&self) -> bool {
        self.double_tap.is_some()
    }

    pub(crate) fn touch_start(&mut self) {
        if let Some(f) = &mut self.touch_start {
            f()
        }
    }

    pub(crate) fn touch_end(&mut self) {
        if let Some(f) = &mut self.touch_end {
            f()
        }
    }

    pub(crate) fn drag_start(&mut self) {
        if let Some(f) = &mut self.drag_start {
            f()
        }
    }

    pub(crate) fn drag_move(&mut self, start: &[Contact], end: &[Contact]) {
        if let (Some(f), Some(start), Some(end)) = (&mut self.drag_move, start.first(), end.first())
        {
            f(start.x, start.y, end.x, end.y)
        }
    }

    pub(crate) fn drag_end(&mut self, start: &[Contact], end: &[Contact]) {
        if let (Some(f), Some(start), Some(end)) = (&mut self.drag_end, start.first(), end.first()) {
            f(start.x, start.y, end.x, end.y)
        }
    }

    pub(crate) fn single_tap(&mut self, at: Point) {
        if let Some(f) = &mut self.single_tap {
            f(at.x, at.y)
        }
    }

    pub(crate) fn double_tap(&mut self, at: Point) {
        if let Some(f) = &mut self.double_tap {
            f(at.x, at.y)
        }
    }

    pub(crate) fn pinch_start(&mut self) {
        if let Some(f) = &mut self.pinch_start {
            f()
        }
    }

    pub(crate) fn pinch_move(&mut self, start: &[Contact], end: &[Contact]) {
        if let (Some(f), Some(start), Some(end)) = (
            &mut self.pinch_move,
            pair_coordinates(start),
            pair_coordinates(end),
        ) {
            f(start, end)
        }
    }

    pub(crate) fn pinch_end(&mut self, start: &[Contact], end: &[Contact]) {
        if let (Some(f), Some(start), Some(end)) = (
            &mut self.pinch_end,
            pair_coordinates(start),
            pair_coordinates(end),
        ) {
            f(start, end)
        }
    }
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered = [
            ("init", self.init.is_some()),
            ("touch_start", self.touch_start.is_some()),
            ("touch_end", self.touch_end.is_some()),
            ("drag_start", self.drag_start.is_some()),
            ("drag_move", self.drag_move.is_some()),
            ("drag_end", self.drag_end.is_some()),
            ("single_tap", self.single_tap.is_some()),
            ("double_tap", self.double_tap.is_some()),
            ("pinch_start", self.pinch_start.is_some()),
            ("pinch_move", self.pinch_move.is_some()),
            ("pinch_end", self.pinch_end.is_some()),
        ];
        f.debug_list()
            .entries(
                registered
                    .iter()
                    .filter(|(_, registered)| *registered)
                    .map(|(name, _)| name),
            )
            .finish()
    }
}
