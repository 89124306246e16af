//! Graphics backend trait
//!
//! The three primitives the face is drawn with.

use resistor_core::compose::{CompositeMode, FontId, Rect, TextAlign, TextOverflow};
use resistor_core::{Rgb, Skin};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display or draw target
    Communication,
    /// Artwork does not fit the box it was laid out in
    InvalidCoordinates,
}

/// Graphics backend trait
///
/// Implementations clip to the display; boxes partly off screen are not an
/// error.
pub trait GraphicsBackend {
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), DisplayError>;

    /// Draw the artwork for a skin with its top-left corner at `rect`
    fn draw_bitmap(&mut self, artwork: Skin, rect: Rect, mode: CompositeMode) -> Result<(), DisplayError>;

    /// Draw text inside a box
    fn draw_text(
        &mut self,
        text: &str,
        font: FontId,
        rect: Rect,
        color: Rgb,
        overflow: TextOverflow,
        align: TextAlign,
    ) -> Result<(), DisplayError>;

    /// Push buffered content to the display
    ///
    /// Unbuffered backends need not override this.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

impl<B: GraphicsBackend + ?Sized> GraphicsBackend for &mut B {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), DisplayError> {
        (**self).fill_rect(rect, color)
    }

    fn draw_bitmap(&mut self, artwork: Skin, rect: Rect, mode: CompositeMode) -> Result<(), DisplayError> {
        (**self).draw_bitmap(artwork, rect, mode)
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontId,
        rect: Rect,
        color: Rgb,
        overflow: TextOverflow,
        align: TextAlign,
    ) -> Result<(), DisplayError> {
        (**self).draw_text(text, font, rect, color, overflow, align)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        (**self).flush()
    }
}
