//! Frame replay

use resistor_core::compose::{DisplayGeometry, DrawOp};
use resistor_core::Watchface;
use resistor_hal::SettingsStore;

use crate::backend::{DisplayError, GraphicsBackend};

/// Replay draw operations in order
///
/// Stops at the first failing operation.
pub fn render<B: GraphicsBackend>(frame: &[DrawOp], backend: &mut B) -> Result<(), DisplayError> {
    for op in frame {
        match op {
            DrawOp::FillRect { rect, color } => backend.fill_rect(*rect, *color)?,
            DrawOp::Artwork { skin, rect, mode } => backend.draw_bitmap(*skin, *rect, *mode)?,
            DrawOp::Text {
                text,
                font,
                rect,
                color,
                overflow,
                align,
            } => backend.draw_text(text, *font, *rect, *color, *overflow, *align)?,
        }
    }
    Ok(())
}

/// Redraw the face if it is dirty
///
/// Returns true if a frame was drawn. The dirty flag is only cleared once
/// the frame reached the display, so a failed draw is retried next time.
pub fn present<S, B>(
    face: &mut Watchface<S>,
    geometry: &DisplayGeometry,
    backend: &mut B,
) -> Result<bool, DisplayError>
where
    S: SettingsStore,
    B: GraphicsBackend,
{
    if !face.is_dirty() {
        return Ok(false);
    }

    let frame = face.compose(geometry);
    if let Err(err) = render(&frame, backend).and_then(|()| backend.flush()) {
        #[cfg(feature = "defmt")]
        defmt::warn!("frame dropped: {}", err);
        return Err(err);
    }

    face.take_dirty();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use resistor_core::compose::{CompositeMode, FontId, Rect, TextAlign, TextOverflow};
    use resistor_core::{Rgb, Skin, TimeSample};
    use resistor_hal::MemoryStore;

    const SCREEN: DisplayGeometry = DisplayGeometry::rectangular(144, 168);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Fill(Rgb),
        Bitmap(Skin),
        Text,
        Flush,
    }

    /// Records calls, optionally failing on the nth one
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call, 16>,
        fail_at: Option<usize>,
    }

    impl Recorder {
        fn failing_at(n: usize) -> Self {
            Self {
                fail_at: Some(n),
                ..Self::default()
            }
        }

        fn record(&mut self, call: Call) -> Result<(), DisplayError> {
            if self.fail_at == Some(self.calls.len()) {
                return Err(DisplayError::Communication);
            }
            self.calls.push(call).unwrap();
            Ok(())
        }
    }

    impl GraphicsBackend for Recorder {
        fn fill_rect(&mut self, _rect: Rect, color: Rgb) -> Result<(), DisplayError> {
            self.record(Call::Fill(color))
        }

        fn draw_bitmap(&mut self, artwork: Skin, _rect: Rect, _mode: CompositeMode) -> Result<(), DisplayError> {
            self.record(Call::Bitmap(artwork))
        }

        fn draw_text(
            &mut self,
            _text: &str,
            _font: FontId,
            _rect: Rect,
            _color: Rgb,
            _overflow: TextOverflow,
            _align: TextAlign,
        ) -> Result<(), DisplayError> {
            self.record(Call::Text)
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.record(Call::Flush)
        }
    }

    fn face() -> Watchface<MemoryStore> {
        Watchface::new(MemoryStore::new(), TimeSample::hms(9, 5, 0).on(3, 7))
    }

    #[test]
    fn test_render_replays_in_order() {
        let frame = face().compose(&SCREEN);
        let mut backend = Recorder::default();
        render(&frame, &mut backend).unwrap();

        assert_eq!(
            backend.calls.as_slice(),
            &[
                Call::Fill(Rgb::KELLY_GREEN),
                Call::Text,
                Call::Text,
                Call::Bitmap(Skin::ThroughHole),
                Call::Fill(Rgb::BLACK),
                Call::Fill(Rgb::WHITE),
                Call::Fill(Rgb::BLACK),
                Call::Fill(Rgb::GREEN),
            ]
        );
    }

    #[test]
    fn test_render_stops_at_first_error() {
        let frame = face().compose(&SCREEN);
        let mut backend = Recorder::failing_at(3);
        assert_eq!(render(&frame, &mut backend), Err(DisplayError::Communication));
        assert_eq!(backend.calls.len(), 3);
    }

    #[test]
    fn test_present_only_when_dirty() {
        let mut face = face();
        let mut backend = Recorder::default();

        assert_eq!(present(&mut face, &SCREEN, &mut backend), Ok(true));
        assert!(!face.is_dirty());
        assert_eq!(backend.calls.last(), Some(&Call::Flush));

        let drawn = backend.calls.len();
        assert_eq!(present(&mut face, &SCREEN, &mut backend), Ok(false));
        assert_eq!(backend.calls.len(), drawn);
    }

    #[test]
    fn test_failed_present_stays_dirty() {
        let mut face = face();
        let mut backend = Recorder::failing_at(0);

        assert_eq!(present(&mut face, &SCREEN, &mut backend), Err(DisplayError::Communication));
        assert!(face.is_dirty());

        backend.fail_at = None;
        assert_eq!(present(&mut face, &SCREEN, &mut backend), Ok(true));
        assert!(!face.is_dirty());
    }

    #[test]
    fn test_backend_through_mut_ref() {
        let frame = face().compose(&SCREEN);
        let mut backend = Recorder::default();
        let mut borrowed = &mut backend;
        render(&frame, &mut borrowed).unwrap();
        assert_eq!(backend.calls.len(), frame.len());
    }
}
