//! Packed RGB colors
//!
//! The display has a 64-color gamut: two bits per channel, so each channel
//! is one of 0x00, 0x55, 0xAA or 0xFF.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color packed as 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WINDSOR_TAN: Rgb = Rgb(0xAA5500);
    pub const RED: Rgb = Rgb(0xFF0000);
    pub const CHROME_YELLOW: Rgb = Rgb(0xFFAA00);
    pub const YELLOW: Rgb = Rgb(0xFFFF00);
    pub const GREEN: Rgb = Rgb(0x00FF00);
    pub const BLUE: Rgb = Rgb(0x0000FF);
    pub const VIVID_VIOLET: Rgb = Rgb(0xAA00FF);
    pub const LIGHT_GRAY: Rgb = Rgb(0xAAAAAA);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const KELLY_GREEN: Rgb = Rgb(0x55AA00);
    pub const IMPERIAL_PURPLE: Rgb = Rgb(0x550055);

    /// Create from a packed 0xRRGGBB value; the top byte is ignored
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    /// Create from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packed 0xRRGGBB value
    pub const fn hex(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Snap every channel to the display gamut
    ///
    /// Keeps the top two bits of each channel and spreads them back over
    /// the full byte, so 0x7F becomes 0x55 and 0x80 becomes 0xAA.
    pub const fn quantized(self) -> Self {
        Self::new(
            quantize_channel(self.r()),
            quantize_channel(self.g()),
            quantize_channel(self.b()),
        )
    }
}

const fn quantize_channel(c: u8) -> u8 {
    (c >> 6) * 0x55
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}
