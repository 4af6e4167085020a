#![forbid(unsafe_code)]

//! The composable layer tree and its render protocol.
//!
//! A [`Layer`] reports a [`Size`] preference per axis and draws itself into
//! a [`Canvas`]. Trees are built once from shared [`LayerRef`] handles and
//! rendered once per frame; a render call resolves the node's concrete
//! extent against the canvas, partitions it among children, and recurses
//! into one derived sub-view per child, in declared order.
//!
//! Stack layers ([`Row`], [`Column`], [`Overlay`]) additionally implement
//! [`Composite`], which exposes their children and allocation primitives.
//! [`Memo`] wraps any `Composite` and caches its size and allocation results
//! until [`Layer::invalidate`] is called.
//!
//! Mutable node state (memo caches, tab selection) lives in interior-mutable
//! cells; trees must not be rendered or invalidated from more than one
//! thread at a time.

pub mod decor;
pub mod lazy;
pub mod leaf;
pub mod memo;
pub mod stack;
pub mod tab;

use std::rc::Rc;
use trellis_layout::Size;
use trellis_render::{Canvas, NullCanvas};

pub use decor::{
    Align, Border, Constrain, SyncSize, Tap, align_bottom, align_bottom_right, align_right,
    border, constrain, free_size, no_expand, sized, sized_height, sized_width, sync_height,
    sync_size, sync_width, tap, with_color,
};
pub use lazy::{Deferred, deferred, either};
pub use leaf::{empty, fill, from_fn, rule_horizontal, rule_vertical, text, text_line};
pub use memo::{Memo, memoized};
pub use stack::{Column, Overlay, Row, column, overlay, row};
pub use tab::{Selection, Tab};

/// A renderable node in the layer tree.
pub trait Layer {
    /// Size preference along the horizontal axis.
    fn width(&self) -> Size;

    /// Size preference along the vertical axis.
    fn height(&self) -> Size;

    /// Draw into the given canvas.
    fn render(&self, canvas: &mut dyn Canvas);

    /// Drop cached layout state in this node and its descendants.
    ///
    /// Stateless layers do nothing; structural layers forward to their
    /// children so a single call on any root reaches every caching node.
    fn invalidate(&self) {}
}

/// A shared handle to a layer.
///
/// Trees are single-threaded; callers keep clones of the handles they need
/// to mutate later (tab selection, memo invalidation).
pub type LayerRef = Rc<dyn Layer>;

/// A layer that lays out an ordered list of children.
///
/// Only the stack layers implement this, which is what makes them (and
/// nothing else) memoizable: [`memoized`] accepts the capability, not a
/// guessed-at runtime type.
pub trait Composite: Layer {
    /// The children, in declared (and paint) order.
    fn children(&self) -> &[LayerRef];

    /// Partition a resolved extent into per-child widths and heights.
    fn alloc_sizes(&self, width: u16, height: u16) -> (Vec<u16>, Vec<u16>);

    /// Draw every child into its allocated sub-view.
    fn render_alloc(&self, canvas: &mut dyn Canvas, widths: &[u16], heights: &[u16]);
}

/// Resolve a layer's concrete extent against a canvas's available extent.
pub fn resolve_extent(layer: &(impl Layer + ?Sized), canvas: &dyn Canvas) -> (u16, u16) {
    (
        layer.width().value(canvas.width()),
        layer.height().value(canvas.height()),
    )
}

/// The shared two-phase render for stack layers: resolve, allocate, draw.
pub(crate) fn render_stack(layer: &dyn Composite, canvas: &mut dyn Canvas) {
    let width = layer.width().value(canvas.width());
    let height = layer.height().value(canvas.height());
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("stack_render", width, height).entered();
    let (widths, heights) = layer.alloc_sizes(width, height);
    layer.render_alloc(canvas, &widths, &heights);
}

pub(crate) fn child_widths(children: &[LayerRef]) -> Vec<Size> {
    children.iter().map(|c| c.width()).collect()
}

pub(crate) fn child_heights(children: &[LayerRef]) -> Vec<Size> {
    children.iter().map(|c| c.height()).collect()
}

/// Run a measurement-only render pass at the given extent.
///
/// Draw calls go to a [`NullCanvas`], so this warms memo caches without
/// touching a real surface.
pub fn prewarm(layer: &dyn Layer, width: u16, height: u16) {
    let mut probe = NullCanvas::new(width, height);
    layer.render(&mut probe);
}
