#![forbid(unsafe_code)]

//! Deferred layers resolved at query time.

use crate::leaf::empty;
use crate::{Layer, LayerRef};
use std::rc::Rc;
use trellis_layout::Size;
use trellis_render::Canvas;

/// A layer resolved anew on every size query and render call.
///
/// A `None` resolution substitutes the zero-size empty layer, so a deferred
/// slot that is currently "nothing" simply takes no space.
pub struct Deferred {
    resolve: Box<dyn Fn() -> Option<LayerRef>>,
}

/// Defer to `resolve` at every query.
pub fn deferred(resolve: impl Fn() -> Option<LayerRef> + 'static) -> LayerRef {
    Rc::new(Deferred {
        resolve: Box::new(resolve),
    })
}

/// Defer to `primary`, falling back to `fallback` when it yields `None`.
pub fn either(primary: impl Fn() -> Option<LayerRef> + 'static, fallback: LayerRef) -> LayerRef {
    deferred(move || Some(primary().unwrap_or_else(|| fallback.clone())))
}

impl Deferred {
    fn current(&self) -> LayerRef {
        (self.resolve)().unwrap_or_else(empty)
    }
}

impl Layer for Deferred {
    fn width(&self) -> Size {
        self.current().width()
    }

    fn height(&self) -> Size {
        self.current().height()
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        self.current().render(canvas);
    }

    fn invalidate(&self) {
        self.current().invalidate();
    }
}
