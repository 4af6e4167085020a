#![forbid(unsafe_code)]

//! Cell attributes.
//!
//! An [`Attr`] packs a palette color and style flags into 16 bits:
//!
//! ```text
//! [11: reverse][10: underline][9: bold][8-0: palette code]
//! ```
//!
//! Palette code 0 is the "no color" sentinel: a draw call carrying
//! [`Attr::DEFAULT`] leaves the choice of color to whatever is underneath it
//! (the terminal default, or a color-default canvas decorator). Codes 1-256
//! map to palette entries 0-255.

use bitflags::bitflags;

bitflags! {
    /// Style flags carried alongside the palette code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u16 {
        /// Bold / increased intensity.
        const BOLD = 1 << 9;
        /// Underlined.
        const UNDERLINE = 1 << 10;
        /// Swapped foreground and background.
        const REVERSE = 1 << 11;
    }
}

/// A packed cell attribute: palette color plus style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attr(u16);

impl Attr {
    const COLOR_MASK: u16 = 0x01FF;

    /// The "no color, no styling" sentinel.
    pub const DEFAULT: Self = Self(0);

    /// ANSI black.
    pub const BLACK: Self = Self(1);
    /// ANSI red.
    pub const RED: Self = Self(2);
    /// ANSI green.
    pub const GREEN: Self = Self(3);
    /// ANSI yellow.
    pub const YELLOW: Self = Self(4);
    /// ANSI blue.
    pub const BLUE: Self = Self(5);
    /// ANSI magenta.
    pub const MAGENTA: Self = Self(6);
    /// ANSI cyan.
    pub const CYAN: Self = Self(7);
    /// ANSI white.
    pub const WHITE: Self = Self(8);

    /// Attribute for a 256-color palette entry.
    #[inline]
    pub const fn indexed(palette: u8) -> Self {
        Self(palette as u16 + 1)
    }

    /// Whether this is the pass-through sentinel (no color, no flags).
    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }

    /// The palette entry, if a color is set.
    #[inline]
    pub const fn color_index(self) -> Option<u8> {
        match self.0 & Self::COLOR_MASK {
            0 => None,
            code => Some((code - 1) as u8),
        }
    }

    /// The style flags.
    #[inline]
    pub const fn flags(self) -> AttrFlags {
        AttrFlags::from_bits_truncate(self.0)
    }

    /// This attribute with the given flags added.
    #[inline]
    #[must_use]
    pub const fn with_flags(self, flags: AttrFlags) -> Self {
        Self(self.0 | flags.bits())
    }

    /// Raw packed value.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }
}
