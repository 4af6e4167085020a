#![forbid(unsafe_code)]

//! Opt-in caching of size and allocation results.

use crate::{Composite, Layer, LayerRef};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trellis_layout::Size;
use trellis_render::Canvas;

/// Caches a stack layer's reported sizes and per-child allocations.
///
/// Both caches persist until [`Layer::invalidate`] is called, which clears
/// them and recurses into the children. A render loop that redraws every
/// frame at a fixed extent skips recomputation entirely; after a terminal
/// resize the caller must invalidate before the next render, or the stale
/// allocation from the old extent is reused.
pub struct Memo {
    inner: Rc<dyn Composite>,
    sizes: Cell<Option<(Size, Size)>>,
    allocs: RefCell<Option<(Vec<u16>, Vec<u16>)>>,
}

/// Wrap a stack layer in a cache.
pub fn memoized(inner: Rc<dyn Composite>) -> Rc<Memo> {
    Rc::new(Memo {
        inner,
        sizes: Cell::new(None),
        allocs: RefCell::new(None),
    })
}

impl Memo {
    fn cached_sizes(&self) -> (Size, Size) {
        if let Some(pair) = self.sizes.get() {
            return pair;
        }
        let pair = (self.inner.width(), self.inner.height());
        self.sizes.set(Some(pair));
        pair
    }
}

impl Layer for Memo {
    fn width(&self) -> Size {
        self.cached_sizes().0
    }

    fn height(&self) -> Size {
        self.cached_sizes().1
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let width = self.width().value(canvas.width());
        let height = self.height().value(canvas.height());
        let (widths, heights) = self
            .allocs
            .borrow_mut()
            .get_or_insert_with(|| self.inner.alloc_sizes(width, height))
            .clone();
        self.inner.render_alloc(canvas, &widths, &heights);
    }

    fn invalidate(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("layout cache cleared");
        self.sizes.set(None);
        *self.allocs.borrow_mut() = None;
        for child in self.inner.children() {
            child.invalidate();
        }
    }
}

impl Composite for Memo {
    fn children(&self) -> &[LayerRef] {
        self.inner.children()
    }

    fn alloc_sizes(&self, width: u16, height: u16) -> (Vec<u16>, Vec<u16>) {
        self.inner.alloc_sizes(width, height)
    }

    fn render_alloc(&self, canvas: &mut dyn Canvas, widths: &[u16], heights: &[u16]) {
        self.inner.render_alloc(canvas, widths, heights);
    }
}
