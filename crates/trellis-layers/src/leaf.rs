#![forbid(unsafe_code)]

//! Leaf drawing primitives.

use crate::decor::{sized_height, sized_width};
use crate::{Layer, LayerRef};
use std::rc::Rc;
use trellis_core::Attr;
use trellis_layout::Size;
use trellis_render::Canvas;
use unicode_width::UnicodeWidthStr;

/// The zero-size layer that draws nothing.
struct Empty;

impl Layer for Empty {
    fn width(&self) -> Size {
        Size::Fixed(0)
    }

    fn height(&self) -> Size {
        Size::Fixed(0)
    }

    fn render(&self, _canvas: &mut dyn Canvas) {}
}

/// A zero-size layer that draws nothing.
pub fn empty() -> LayerRef {
    Rc::new(Empty)
}

struct Fill {
    glyph: char,
}

impl Layer for Fill {
    fn width(&self) -> Size {
        Size::Unbounded
    }

    fn height(&self) -> Size {
        Size::Unbounded
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                canvas.draw(x, y, self.glyph, Attr::DEFAULT, Attr::DEFAULT);
            }
        }
    }
}

/// A solid block of one repeated character, filling whatever it is given.
pub fn fill(glyph: char) -> LayerRef {
    Rc::new(Fill { glyph })
}

struct Text {
    lines: Vec<String>,
    width: u16,
    height: u16,
}

impl Layer for Text {
    fn width(&self) -> Size {
        Size::Fixed(self.width)
    }

    fn height(&self) -> Size {
        Size::Fixed(self.height)
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for (y, line) in self.lines.iter().enumerate() {
            canvas.draw_text(0, y as u16, line, Attr::DEFAULT, Attr::DEFAULT);
        }
    }
}

/// A literal text block sized to its widest line and line count.
pub fn text(content: &str) -> LayerRef {
    let lines: Vec<String> = content.split('\n').map(str::to_owned).collect();
    let width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let height = lines.len().min(u16::MAX as usize) as u16;
    Rc::new(Text {
        lines,
        width,
        height,
    })
}

struct TextLine {
    content: String,
}

impl Layer for TextLine {
    fn width(&self) -> Size {
        Size::Unbounded
    }

    fn height(&self) -> Size {
        Size::Fixed(1)
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(0, 0, &self.content, Attr::DEFAULT, Attr::DEFAULT);
    }
}

/// A single line of literal text. Newlines render as `↵`.
pub fn text_line(content: &str) -> LayerRef {
    Rc::new(TextLine {
        content: content.replace('\n', "↵"),
    })
}

struct FnLayer {
    draw: Box<dyn Fn(&mut dyn Canvas)>,
}

impl Layer for FnLayer {
    fn width(&self) -> Size {
        Size::Unbounded
    }

    fn height(&self) -> Size {
        Size::Unbounded
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        (self.draw)(canvas);
    }
}

/// A free-size layer rendering through the given function.
pub fn from_fn(draw: impl Fn(&mut dyn Canvas) + 'static) -> LayerRef {
    Rc::new(FnLayer {
        draw: Box::new(draw),
    })
}

/// A one-cell-high horizontal line of the given glyph.
pub fn rule_horizontal(glyph: char) -> LayerRef {
    sized_height(1, fill(glyph))
}

/// A one-cell-wide vertical line of the given glyph.
pub fn rule_vertical(glyph: char) -> LayerRef {
    sized_width(1, fill(glyph))
}
