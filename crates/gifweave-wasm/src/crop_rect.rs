//! WASM bindings for the interactive crop rectangle.
//!
//! A `JsCropSession` is created per image being cropped. The UI forwards
//! pointer events in image pixel coordinates and reads the rectangle back
//! for drawing.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsCropSession(seq.width, seq.height);
//! canvas.onpointermove = (e) => {
//!   const [x, y] = toImageSpace(e);
//!   if (session.is_dragging) {
//!     if (session.pointer_move(x, y)) redraw(session);
//!   } else {
//!     canvas.style.cursor = session.hover_cursor(x, y);
//!   }
//! };
//! const rect = session.pixel_rect(); // [left, top, right, bottom]
//! const cropped = crop_sequence(seq, ...rect);
//! ```

use gifweave_core::crop_rect::{CropSession, CursorHint, DragMode, Point, Rect};
use gifweave_core::sequence::Size;
use wasm_bindgen::prelude::*;

/// Crop rectangle session for JavaScript.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Start a session covering a whole `width` x `height` image.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> JsCropSession {
        JsCropSession {
            inner: CropSession::new(Rect::from_size(Size::new(width, height))),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn left(&self) -> f64 {
        self.inner.rect().left
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> f64 {
        self.inner.rect().top
    }

    #[wasm_bindgen(getter)]
    pub fn right(&self) -> f64 {
        self.inner.rect().right
    }

    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> f64 {
        self.inner.rect().bottom
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Mode a press at (x, y) would start: "top_left", "top_right",
    /// "bottom_left", "bottom_right", "move" or "none".
    pub fn hover(&self, x: f64, y: f64) -> String {
        mode_name(self.inner.hover(Point::new(x, y))).to_string()
    }

    /// CSS cursor name for the mode under (x, y).
    pub fn hover_cursor(&self, x: f64, y: f64) -> String {
        css_cursor(self.inner.hover(Point::new(x, y)).cursor_hint()).to_string()
    }

    /// Start a gesture; returns the mode name (see `hover`).
    pub fn pointer_down(&mut self, x: f64, y: f64) -> String {
        mode_name(self.inner.pointer_down(Point::new(x, y))).to_string()
    }

    /// Returns `true` when the rectangle changed and needs a redraw.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_move(Point::new(x, y))
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Rebind to a new image size, keeping as much of the rectangle as fits.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.inner.set_bounds(Rect::from_size(Size::new(width, height)));
    }

    /// Integer crop bounds as `[left, top, right, bottom]`.
    pub fn pixel_rect(&self) -> Vec<u32> {
        let r = self.inner.pixel_rect();
        vec![r.left, r.top, r.right, r.bottom]
    }
}

fn mode_name(mode: DragMode) -> &'static str {
    match mode {
        DragMode::TopLeft => "top_left",
        DragMode::TopRight => "top_right",
        DragMode::BottomLeft => "bottom_left",
        DragMode::BottomRight => "bottom_right",
        DragMode::Move => "move",
        DragMode::None => "none",
    }
}

fn css_cursor(hint: CursorHint) -> &'static str {
    match hint {
        CursorHint::Default => "default",
        CursorHint::ResizeNwSe => "nwse-resize",
        CursorHint::ResizeNeSw => "nesw-resize",
        CursorHint::Move => "move",
    }
}
