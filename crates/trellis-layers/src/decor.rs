#![forbid(unsafe_code)]

//! Single-child decorators: borders, alignment, size overrides, size
//! syncing, and render interception.

use crate::{Layer, LayerRef, resolve_extent};
use std::rc::Rc;
use trellis_core::Attr;
use trellis_layout::Size;
use trellis_render::{Canvas, DefaultColors, View};

/// Draws a one-cell frame around its child.
///
/// Reports the child's size plus two on each axis. The horizontal glyph runs
/// along the full top and bottom rows, the vertical glyph along the full
/// left and right columns (so corners carry the vertical glyph), then the
/// child renders into the inset view.
pub struct Border {
    child: LayerRef,
    horizontal: char,
    vertical: char,
}

/// Frame `child` with the given horizontal and vertical glyphs.
pub fn border(horizontal: char, vertical: char, child: LayerRef) -> LayerRef {
    Rc::new(Border {
        child,
        horizontal,
        vertical,
    })
}

impl Layer for Border {
    fn width(&self) -> Size {
        self.child.width().add(Size::Fixed(2))
    }

    fn height(&self) -> Size {
        self.child.height().add(Size::Fixed(2))
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let width = canvas.width();
        let height = canvas.height();
        for x in 0..width {
            canvas.draw(x, 0, self.horizontal, Attr::DEFAULT, Attr::DEFAULT);
            canvas.draw(
                x,
                height.saturating_sub(1),
                self.horizontal,
                Attr::DEFAULT,
                Attr::DEFAULT,
            );
        }
        for y in 0..height {
            canvas.draw(0, y, self.vertical, Attr::DEFAULT, Attr::DEFAULT);
            canvas.draw(
                width.saturating_sub(1),
                y,
                self.vertical,
                Attr::DEFAULT,
                Attr::DEFAULT,
            );
        }
        let mut inner = View::new(
            canvas,
            1,
            1,
            width.saturating_sub(2),
            height.saturating_sub(2),
        );
        self.child.render(&mut inner);
    }

    fn invalidate(&self) {
        self.child.invalidate();
    }
}

/// Positions its child against the right and/or bottom edge.
///
/// Reports `Unbounded` on both axes so it is handed all available room to
/// align within; at render time the child is resolved against the allocated
/// view and offset toward the chosen edges. The remaining area is left
/// untouched.
pub struct Align {
    child: LayerRef,
    right: bool,
    bottom: bool,
}

fn align(child: LayerRef, right: bool, bottom: bool) -> LayerRef {
    Rc::new(Align {
        child,
        right,
        bottom,
    })
}

/// Render `child` at its own size against the right edge.
pub fn align_right(child: LayerRef) -> LayerRef {
    align(child, true, false)
}

/// Render `child` at its own size against the bottom edge.
pub fn align_bottom(child: LayerRef) -> LayerRef {
    align(child, false, true)
}

/// Render `child` at its own size in the bottom-right corner.
pub fn align_bottom_right(child: LayerRef) -> LayerRef {
    align(child, true, true)
}

/// Render `child` at its own size at the origin, claiming all available
/// room but not stretching the child into it.
pub fn no_expand(child: LayerRef) -> LayerRef {
    align(child, false, false)
}

impl Layer for Align {
    fn width(&self) -> Size {
        Size::Unbounded
    }

    fn height(&self) -> Size {
        Size::Unbounded
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let (width, height) = resolve_extent(self.child.as_ref(), &*canvas);
        let x = if self.right {
            canvas.width().saturating_sub(width)
        } else {
            0
        };
        let y = if self.bottom {
            canvas.height().saturating_sub(height)
        } else {
            0
        };
        let mut sub = View::new(canvas, x, y, width, height);
        self.child.render(&mut sub);
    }

    fn invalidate(&self) {
        self.child.invalidate();
    }
}

/// Replaces the reported size on one or both axes.
///
/// Rendering is a pure pass-through; the override only changes what parents
/// allocate, never what the child draws.
pub struct Constrain {
    child: LayerRef,
    width: Option<Size>,
    height: Option<Size>,
}

/// Override the reported size; `None` axes fall through to the child.
pub fn constrain(width: Option<Size>, height: Option<Size>, child: LayerRef) -> LayerRef {
    Rc::new(Constrain {
        child,
        width,
        height,
    })
}

/// Fix both axes; negative values leave the axis unconstrained.
pub fn sized(width: i32, height: i32, child: LayerRef) -> LayerRef {
    constrain(
        Some(Size::from_int(width)),
        Some(Size::from_int(height)),
        child,
    )
}

/// Fix the width; negative leaves it unconstrained.
pub fn sized_width(width: i32, child: LayerRef) -> LayerRef {
    constrain(Some(Size::from_int(width)), None, child)
}

/// Fix the height; negative leaves it unconstrained.
pub fn sized_height(height: i32, child: LayerRef) -> LayerRef {
    constrain(None, Some(Size::from_int(height)), child)
}

/// Unconstrain both axes.
pub fn free_size(child: LayerRef) -> LayerRef {
    constrain(Some(Size::Unbounded), Some(Size::Unbounded), child)
}

impl Layer for Constrain {
    fn width(&self) -> Size {
        self.width.unwrap_or_else(|| self.child.width())
    }

    fn height(&self) -> Size {
        self.height.unwrap_or_else(|| self.child.height())
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        self.child.render(canvas);
    }

    fn invalidate(&self) {
        self.child.invalidate();
    }
}

/// Reports another layer's size on the synced axes.
///
/// The reference must not be an ancestor or descendant of this node; size
/// queries recurse through it and a structural cycle would never terminate.
pub struct SyncSize {
    reference: LayerRef,
    child: LayerRef,
    sync_width: bool,
    sync_height: bool,
}

fn sync(reference: LayerRef, child: LayerRef, sync_width: bool, sync_height: bool) -> LayerRef {
    Rc::new(SyncSize {
        reference,
        child,
        sync_width,
        sync_height,
    })
}

/// Report `reference`'s size on both axes.
pub fn sync_size(reference: LayerRef, child: LayerRef) -> LayerRef {
    sync(reference, child, true, true)
}

/// Report `reference`'s width.
pub fn sync_width(reference: LayerRef, child: LayerRef) -> LayerRef {
    sync(reference, child, true, false)
}

/// Report `reference`'s height.
pub fn sync_height(reference: LayerRef, child: LayerRef) -> LayerRef {
    sync(reference, child, false, true)
}

impl Layer for SyncSize {
    fn width(&self) -> Size {
        if self.sync_width {
            self.reference.width()
        } else {
            self.child.width()
        }
    }

    fn height(&self) -> Size {
        if self.sync_height {
            self.reference.height()
        } else {
            self.child.height()
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        self.child.render(canvas);
    }

    fn invalidate(&self) {
        self.child.invalidate();
    }
}

/// Intercepts the child's render call.
pub struct Tap {
    child: LayerRef,
    intercept: Box<dyn Fn(&dyn Layer, &mut dyn Canvas)>,
}

/// Route `child`'s render through `intercept`; sizes pass through.
pub fn tap(child: LayerRef, intercept: impl Fn(&dyn Layer, &mut dyn Canvas) + 'static) -> LayerRef {
    Rc::new(Tap {
        child,
        intercept: Box::new(intercept),
    })
}

/// Render `child` with default colors substituted for the no-color
/// sentinel.
pub fn with_color(fg: Attr, bg: Attr, child: LayerRef) -> LayerRef {
    tap(child, move |layer, canvas| {
        let mut colored = DefaultColors::new(canvas, fg, bg);
        layer.render(&mut colored);
    })
}

impl Layer for Tap {
    fn width(&self) -> Size {
        self.child.width()
    }

    fn height(&self) -> Size {
        self.child.height()
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        (self.intercept)(self.child.as_ref(), canvas);
    }

    fn invalidate(&self) {
        self.child.invalidate();
    }
}
