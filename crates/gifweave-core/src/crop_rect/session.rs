//! Stateful owner of a crop rectangle for one interactive session.

use super::{begin_interaction, reset, set_bounds, update, DragMode, Point, Rect};
use crate::ops::PixelRect;

/// Snapshot taken at pointer-down.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    mode: DragMode,
    press: Point,
    rect_at_press: Rect,
}

/// A crop rectangle plus the gesture currently dragging it.
///
/// Pointer events must be delivered in order: `pointer_down`, any number of
/// `pointer_move`, then `pointer_up`.
#[derive(Debug, Clone)]
pub struct CropSession {
    bounds: Rect,
    rect: Rect,
    gesture: Option<Gesture>,
}

impl CropSession {
    /// Start a session with the rectangle covering all of `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            rect: reset(&bounds),
            gesture: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Drag mode a press at `pointer` would start, for cursor feedback.
    pub fn hover(&self, pointer: Point) -> DragMode {
        begin_interaction(&self.rect, pointer)
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Begin a gesture. Presses that grab nothing start no gesture.
    pub fn pointer_down(&mut self, pointer: Point) -> DragMode {
        let mode = begin_interaction(&self.rect, pointer);
        self.gesture = (mode != DragMode::None).then_some(Gesture {
            mode,
            press: pointer,
            rect_at_press: self.rect,
        });
        mode
    }

    /// Apply the drag for the current pointer position.
    ///
    /// Returns `true` if the rectangle changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(gesture) = self.gesture else {
            return false;
        };

        let delta = pointer.delta_from(gesture.press);
        match update(gesture.mode, &gesture.rect_at_press, delta, &self.bounds) {
            Some(rect) if rect != self.rect => {
                self.rect = rect;
                true
            }
            _ => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.gesture = None;
    }

    /// A complete press, move and release. Returns `true` if the rectangle changed.
    pub fn drag(&mut self, from: Point, to: Point) -> bool {
        self.pointer_down(from);
        let changed = self.pointer_move(to);
        self.pointer_up();
        changed
    }

    /// Restore the rectangle to the full bounds and drop any gesture.
    pub fn reset(&mut self) {
        self.rect = reset(&self.bounds);
        self.gesture = None;
    }

    /// Switch to new bounds, keeping as much of the rectangle as fits.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.rect = set_bounds(&self.rect, &bounds);
        self.bounds = bounds;
        self.gesture = None;
    }

    /// Integer rectangle to pass to [`crate::ops::crop`].
    pub fn pixel_rect(&self) -> PixelRect {
        self.rect.to_pixel_rect()
    }
}
