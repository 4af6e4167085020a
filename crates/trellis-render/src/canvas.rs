#![forbid(unsafe_code)]

//! The canvas contract and sub-view derivation.

use trellis_core::{Attr, Extent, Rect};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A bounded drawing surface.
///
/// Coordinates are relative to the current view. A draw call outside the
/// view is a silent no-op; the render path carries no bounds errors.
pub trait Canvas {
    /// Width of this view in cells.
    fn width(&self) -> u16;

    /// Height of this view in cells.
    fn height(&self) -> u16;

    /// Write one cell, if it falls inside the view.
    fn draw(&mut self, x: u16, y: u16, ch: char, fg: Attr, bg: Attr);

    /// Width and height together.
    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }

    /// Write a run of cells starting at `(x, y)`, advancing by display
    /// width and stopping at the view edge.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Attr, bg: Attr) {
        let mut cx = x;
        for grapheme in text.graphemes(true) {
            if cx >= self.width() {
                break;
            }
            let w = UnicodeWidthStr::width(grapheme);
            if w == 0 {
                continue;
            }
            if let Some(ch) = grapheme.chars().next() {
                self.draw(cx, y, ch, fg, bg);
            }
            cx = cx.saturating_add(w as u16);
        }
    }

    /// Fill the entire view with blanks.
    fn clear(&mut self) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.draw(x, y, ' ', Attr::DEFAULT, Attr::DEFAULT);
            }
        }
    }
}

/// A sub-view of another canvas.
///
/// The requested width and height are clamped into the parent's extent; the
/// offset is applied as-is. An offset past the parent edge yields a view
/// whose writes all land outside the parent and are absorbed by its own
/// bounds check, which is what edge-aligning decorators rely on.
pub struct View<'a> {
    target: &'a mut dyn Canvas,
    rect: Rect,
}

impl<'a> View<'a> {
    /// Derive a clamped sub-view of `target`.
    pub fn new(target: &'a mut dyn Canvas, x: u16, y: u16, width: u16, height: u16) -> Self {
        let rect = Rect::new(x, y, width.min(target.width()), height.min(target.height()));
        Self { target, rect }
    }

    /// The view's rectangle in the parent's coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Canvas for View<'_> {
    fn width(&self) -> u16 {
        self.rect.width
    }

    fn height(&self) -> u16 {
        self.rect.height
    }

    fn draw(&mut self, x: u16, y: u16, ch: char, fg: Attr, bg: Attr) {
        if x < self.rect.width && y < self.rect.height {
            self.target.draw(
                self.rect.x.saturating_add(x),
                self.rect.y.saturating_add(y),
                ch,
                fg,
                bg,
            );
        }
    }
}
