#![forbid(unsafe_code)]

//! Trellis public facade crate.
//!
//! This crate re-exports the stable surface of the internal crates: the
//! size algebra and allocators, the canvas abstraction and its backends,
//! and the composable layer tree. Build a tree once from the constructors
//! in [`prelude`], then call `render(layer, canvas)` once per frame.

// --- Core re-exports -------------------------------------------------------

pub use trellis_core::attr::{Attr, AttrFlags};
pub use trellis_core::geometry::{Extent, Rect};

// --- Layout re-exports -----------------------------------------------------

pub use trellis_layout::size::{self, Size};
pub use trellis_layout::{alloc_fair, alloc_max};

// --- Render re-exports -----------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
pub use trellis_render::CrosstermSink;
pub use trellis_render::{Canvas, CellSink, DefaultColors, NullCanvas, TermCanvas, TextCanvas, View};

// --- Layer re-exports ------------------------------------------------------

pub use trellis_layers::{
    Align, Border, Column, Composite, Constrain, Deferred, Layer, LayerRef, Memo, Overlay, Row,
    Selection, SyncSize, Tab, Tap, align_bottom, align_bottom_right, align_right, border, column,
    constrain, deferred, either, empty, fill, free_size, from_fn, memoized, no_expand, overlay,
    prewarm, resolve_extent, row, rule_horizontal, rule_vertical, sized, sized_height,
    sized_width, sync_height, sync_size, sync_width, tap, text, text_line, with_color,
};

/// Commonly used items for building and rendering layer trees.
pub mod prelude {
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::CrosstermSink;
    pub use crate::{
        Attr, Canvas, Layer, LayerRef, Selection, Size, Tab, TermCanvas, TextCanvas, align_bottom,
        align_bottom_right, align_right, border, column, deferred, either, empty, fill, free_size,
        from_fn, memoized, no_expand, overlay, prewarm, row, rule_horizontal, rule_vertical,
        sized, sized_height, sized_width, sync_height, sync_size, sync_width, text, text_line,
        with_color,
    };
}
