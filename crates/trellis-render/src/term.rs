#![forbid(unsafe_code)]

//! Live terminal backend.
//!
//! The terminal driver itself stays behind the [`CellSink`] boundary: the
//! canvas layer only needs cell writes, an extent query, and a flush. Any
//! driver satisfying that contract is pluggable; [`CrosstermSink`] is the
//! stock implementation for native targets.

use crate::canvas::Canvas;
use std::io;
use trellis_core::{Attr, Extent};

/// A passive cell-setting terminal driver.
pub trait CellSink {
    /// Current terminal extent.
    fn size(&self) -> Extent;

    /// Stage one cell. Best-effort: failures are deferred to [`flush`].
    ///
    /// [`flush`]: CellSink::flush
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Attr, bg: Attr);

    /// Push staged cells out to the terminal.
    fn flush(&mut self) -> io::Result<()>;
}

/// A canvas over a live terminal.
///
/// The extent is re-read from the sink on every query, so a terminal resize
/// becomes visible on the next render call. Layers holding cached
/// allocations must be invalidated by the caller when that happens.
pub struct TermCanvas<S: CellSink> {
    sink: S,
}

impl<S: CellSink> TermCanvas<S> {
    /// Wrap a driver sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Push staged cells out to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Access the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: CellSink> Canvas for TermCanvas<S> {
    fn width(&self) -> u16 {
        self.sink.size().width
    }

    fn height(&self) -> u16 {
        self.sink.size().height
    }

    fn draw(&mut self, x: u16, y: u16, ch: char, fg: Attr, bg: Attr) {
        let extent = self.sink.size();
        if x < extent.width && y < extent.height {
            self.sink.set_cell(x, y, ch, fg, bg);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::CrosstermSink;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::CellSink;
    use crossterm::style::{Attribute, Color, ContentStyle, PrintStyledContent, StyledContent};
    use crossterm::{cursor, queue};
    use std::io::{self, BufWriter, Stdout, Write};
    use trellis_core::{Attr, AttrFlags, Extent};

    /// A [`CellSink`] queueing styled writes through crossterm.
    pub struct CrosstermSink<W: Write> {
        out: W,
    }

    impl CrosstermSink<BufWriter<Stdout>> {
        /// A sink over buffered stdout.
        pub fn stdout() -> Self {
            Self {
                out: BufWriter::new(io::stdout()),
            }
        }
    }

    impl<W: Write> CrosstermSink<W> {
        /// A sink over an arbitrary writer.
        pub fn new(out: W) -> Self {
            Self { out }
        }
    }

    fn to_color(attr: Attr) -> Color {
        match attr.color_index() {
            Some(i) => Color::AnsiValue(i),
            None => Color::Reset,
        }
    }

    fn to_style(fg: Attr, bg: Attr) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = Some(to_color(fg));
        style.background_color = Some(to_color(bg));
        let flags = fg.flags();
        if flags.contains(AttrFlags::BOLD) {
            style.attributes.set(Attribute::Bold);
        }
        if flags.contains(AttrFlags::UNDERLINE) {
            style.attributes.set(Attribute::Underlined);
        }
        if flags.contains(AttrFlags::REVERSE) {
            style.attributes.set(Attribute::Reverse);
        }
        style
    }

    impl<W: Write> CellSink for CrosstermSink<W> {
        fn size(&self) -> Extent {
            crossterm::terminal::size()
                .map(Extent::from)
                .unwrap_or_default()
        }

        fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Attr, bg: Attr) {
            // Staged into the writer's buffer; an error here resurfaces on
            // flush, which is where callers handle I/O.
            let _ = queue!(
                self.out,
                cursor::MoveTo(x, y),
                PrintStyledContent(StyledContent::new(to_style(fg, bg), ch)),
            );
        }

        fn flush(&mut self) -> io::Result<()> {
            self.out.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellSink, TermCanvas};
    use crate::canvas::Canvas;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;
    use trellis_core::{Attr, Extent};

    struct FakeTerm {
        size: Rc<Cell<Extent>>,
        cells: Vec<(u16, u16, char)>,
    }

    impl CellSink for FakeTerm {
        fn size(&self) -> Extent {
            self.size.get()
        }
        fn set_cell(&mut self, x: u16, y: u16, ch: char, _fg: Attr, _bg: Attr) {
            self.cells.push((x, y, ch));
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn draws_inside_current_extent_only() {
        let size = Rc::new(Cell::new(Extent::new(4, 2)));
        let mut canvas = TermCanvas::new(FakeTerm {
            size: size.clone(),
            cells: Vec::new(),
        });
        canvas.draw(3, 1, 'a', Attr::DEFAULT, Attr::DEFAULT);
        canvas.draw(4, 0, 'b', Attr::DEFAULT, Attr::DEFAULT);
        assert_eq!(canvas.sink_mut().cells, vec![(3, 1, 'a')]);
    }

    #[test]
    fn resize_is_visible_between_calls() {
        let size = Rc::new(Cell::new(Extent::new(2, 2)));
        let mut canvas = TermCanvas::new(FakeTerm {
            size: size.clone(),
            cells: Vec::new(),
        });
        assert_eq!(canvas.width(), 2);
        size.set(Extent::new(9, 5));
        assert_eq!(canvas.width(), 9);
        canvas.draw(8, 4, 'x', Attr::DEFAULT, Attr::DEFAULT);
        assert_eq!(canvas.sink_mut().cells, vec![(8, 4, 'x')]);
    }
}
