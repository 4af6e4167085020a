#![forbid(unsafe_code)]

//! Default-color substitution decorator.

use crate::canvas::Canvas;
use trellis_core::Attr;

/// Wraps a canvas and substitutes configured defaults for the
/// [`Attr::DEFAULT`] sentinel.
///
/// Every draw routes through the decorator, so sub-views derived from it
/// inherit the substitution; a nested decorator closest to the draw wins.
pub struct DefaultColors<'a> {
    target: &'a mut dyn Canvas,
    fg: Attr,
    bg: Attr,
}

impl<'a> DefaultColors<'a> {
    /// Decorate `target` with default foreground and background attributes.
    pub fn new(target: &'a mut dyn Canvas, fg: Attr, bg: Attr) -> Self {
        Self { target, fg, bg }
    }
}

impl Canvas for DefaultColors<'_> {
    fn width(&self) -> u16 {
        self.target.width()
    }

    fn height(&self) -> u16 {
        self.target.height()
    }

    fn draw(&mut self, x: u16, y: u16, ch: char, fg: Attr, bg: Attr) {
        let fg = if fg.is_default() { self.fg } else { fg };
        let bg = if bg.is_default() { self.bg } else { bg };
        self.target.draw(x, y, ch, fg, bg);
    }
}
