//! Interactive crop rectangle engine.
//!
//! Pointer input is interpreted as either moving the rectangle or dragging
//! one of its corners. The rectangle always stays inside its bounds and never
//! gets smaller than [`MIN_SIZE`] on either axis (unless the bounds
//! themselves are smaller, in which case it equals the bounds).
//!
//! The free functions are pure: an update is computed from the mode chosen at
//! press time, the rectangle as it was at press time, and the cumulative
//! pointer delta. [`CropSession`] wraps them for UI code that wants a single
//! owner for the rectangle and the in-progress gesture.

mod geometry;
mod session;

pub use geometry::{Point, Rect};
pub use session::CropSession;

use serde::{Deserialize, Serialize};

/// Smallest allowed width or height of the crop rectangle.
pub const MIN_SIZE: f64 = 16.0;

/// Distance from an edge within which a press grabs that edge.
pub const HANDLE_MARGIN: f64 = 12.0;

/// What a pointer gesture does to the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DragMode {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Move,
    #[default]
    None,
}

/// Pointer shape a UI should show for a drag mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    Default,
    /// Diagonal resize from top-left to bottom-right.
    ResizeNwSe,
    /// Diagonal resize from top-right to bottom-left.
    ResizeNeSw,
    Move,
}

impl DragMode {
    pub fn cursor_hint(self) -> CursorHint {
        match self {
            DragMode::TopLeft | DragMode::BottomRight => CursorHint::ResizeNwSe,
            DragMode::TopRight | DragMode::BottomLeft => CursorHint::ResizeNeSw,
            DragMode::Move => CursorHint::Move,
            DragMode::None => CursorHint::Default,
        }
    }
}

/// Classify a press at `pointer` against `rect`.
///
/// Corners win over moving; each edge counts as near when the pointer is
/// within [`HANDLE_MARGIN`] of it, inside or outside the rectangle.
pub fn begin_interaction(rect: &Rect, pointer: Point) -> DragMode {
    let near_left = (pointer.x - rect.left).abs() <= HANDLE_MARGIN;
    let near_right = (pointer.x - rect.right).abs() <= HANDLE_MARGIN;
    let near_top = (pointer.y - rect.top).abs() <= HANDLE_MARGIN;
    let near_bottom = (pointer.y - rect.bottom).abs() <= HANDLE_MARGIN;

    if near_left && near_top {
        DragMode::TopLeft
    } else if near_right && near_top {
        DragMode::TopRight
    } else if near_left && near_bottom {
        DragMode::BottomLeft
    } else if near_right && near_bottom {
        DragMode::BottomRight
    } else if rect.contains(pointer) {
        DragMode::Move
    } else {
        DragMode::None
    }
}

/// Compute the rectangle for a drag in progress.
///
/// Returns `None` for [`DragMode::None`] and when the result would be smaller
/// than [`MIN_SIZE`] after clipping to `bounds`; the caller then keeps its
/// current rectangle.
pub fn update(mode: DragMode, rect_at_press: &Rect, delta: Point, bounds: &Rect) -> Option<Rect> {
    let moved = match mode {
        DragMode::None => return None,
        DragMode::Move => constrain_move(rect_at_press.translate(delta), bounds),
        corner => resize_corner(corner, rect_at_press, delta, bounds),
    };

    moved
        .intersect(bounds)
        .filter(|r| r.width() >= MIN_SIZE && r.height() >= MIN_SIZE)
}

/// Rectangle covering all of `bounds`.
pub fn reset(bounds: &Rect) -> Rect {
    *bounds
}

/// Fit `current` to new bounds, falling back to the full bounds when too
/// little of it survives.
pub fn set_bounds(current: &Rect, new_bounds: &Rect) -> Rect {
    current
        .intersect(new_bounds)
        .filter(|r| r.width() >= MIN_SIZE && r.height() >= MIN_SIZE)
        .unwrap_or(*new_bounds)
}

/// Shift a translated rectangle back inside `bounds` by the minimum amount.
fn constrain_move(rect: Rect, bounds: &Rect) -> Rect {
    let dx = if rect.left < bounds.left {
        bounds.left - rect.left
    } else if rect.right > bounds.right {
        bounds.right - rect.right
    } else {
        0.0
    };
    let dy = if rect.top < bounds.top {
        bounds.top - rect.top
    } else if rect.bottom > bounds.bottom {
        bounds.bottom - rect.bottom
    } else {
        0.0
    };
    rect.translate(Point::new(dx, dy))
}

/// Drag the edges that meet at `corner`.
///
/// Each edge is clamped to `bounds` and only applied when its axis keeps at
/// least `MIN_SIZE`.
fn resize_corner(corner: DragMode, rect: &Rect, delta: Point, bounds: &Rect) -> Rect {
    let mut out = *rect;

    let moves_left = matches!(corner, DragMode::TopLeft | DragMode::BottomLeft);
    let moves_top = matches!(corner, DragMode::TopLeft | DragMode::TopRight);

    if moves_left {
        let left = bounds.left.max(rect.left + delta.x);
        if rect.right - left >= MIN_SIZE {
            out.left = left;
        }
    } else {
        let right = bounds.right.min(rect.right + delta.x);
        if right - rect.left >= MIN_SIZE {
            out.right = right;
        }
    }

    if moves_top {
        let top = bounds.top.max(rect.top + delta.y);
        if rect.bottom - top >= MIN_SIZE {
            out.top = top;
        }
    } else {
        let bottom = bounds.bottom.min(rect.bottom + delta.y);
        if bottom - rect.top >= MIN_SIZE {
            out.bottom = bottom;
        }
    }

    out
}
