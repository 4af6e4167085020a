#![forbid(unsafe_code)]

//! Drawing surfaces.
//!
//! A [`Canvas`] is a bounded rectangular view that layers draw into. Views
//! compose: [`View`] derives a clamped sub-view of any canvas, and
//! [`DefaultColors`] decorates a canvas with default colors substituted for
//! the pass-through sentinel.
//!
//! Backends:
//!
//! - [`TextCanvas`] - in-memory character grid, used for deterministic tests;
//!   its `Display` impl is the row-major snapshot format
//! - [`TermCanvas`] - live surface over a [`CellSink`] terminal driver whose
//!   extent is re-read on every query
//! - [`NullCanvas`] - reports an extent and discards all draws, for
//!   measurement-only passes

pub mod canvas;
pub mod color;
pub mod null;
pub mod term;
pub mod text;

pub use canvas::{Canvas, View};
pub use color::DefaultColors;
pub use null::NullCanvas;
#[cfg(not(target_arch = "wasm32"))]
pub use term::CrosstermSink;
pub use term::{CellSink, TermCanvas};
pub use text::TextCanvas;
