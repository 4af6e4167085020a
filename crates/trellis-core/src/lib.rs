#![forbid(unsafe_code)]

//! Shared primitives for the trellis crates: geometry and cell attributes.

pub mod attr;
pub mod geometry;

pub use attr::{Attr, AttrFlags};
pub use geometry::{Extent, Rect};
